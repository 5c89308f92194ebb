//! Base trait for action descriptors.

use std::fmt::Debug;

/// Marker trait for action descriptors.
///
/// Actions are created once, dispatched once, then owned by the reducer.
/// They never hold a reference back to whatever built them.
pub trait Action: Clone + Debug + Send + 'static {
    /// Closed set of type tags this action family draws from.
    type Kind: Copy + Debug + Eq + Send + Sync + 'static;

    /// The fixed type tag of this action. Never depends on the payload.
    fn kind(&self) -> Self::Kind;
}
