//! Action factory for the monitor API.
//!
//! One constructor per operation/outcome pair. Constructors are pure and
//! infallible: whatever they are given ends up verbatim in the payload.

mod api;
mod types;

pub use api::{AgentRef, ApiAction, ListAgentsRequest};
pub use types::{ActionType, UnknownActionType};
