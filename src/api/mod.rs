//! Monitor API access.
//!
//! - `client.rs` - HTTP calls for `/ping`, `/agents` and `/agents/{org}:{cn}`
//! - `effects.rs` - Dispatches request/outcome actions around each call
//! - `error.rs` - Error classification and JSON payload rendering

mod client;
mod effects;
mod error;

pub use client::ApiClient;
pub use effects::ApiEffects;
pub use error::ApiError;
