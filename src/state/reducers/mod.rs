//! Reducers consuming action descriptors.

mod api;

pub use api::{ApiReducer, ApiState, RequestStatus};
