//! Base trait for store state.

/// Marker trait for state held by a [`Store`](crate::state::Store).
///
/// States are replaced wholesale on every dispatch and cloned out to readers,
/// so they must be cheap to compare for change detection.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
