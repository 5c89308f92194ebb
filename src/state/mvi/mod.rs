//! Unidirectional data flow primitives for the client state layer.
//!
//! ```text
//! Effect ──→ Action ──→ Reducer ──→ State ──→ Subscribers
//!   ↑                                            │
//!   └────────────────────────────────────────────┘
//! ```
//!
//! - **Action**: a tagged, immutable descriptor of a requested or completed transition
//! - **Reducer**: pure function that folds an action into a new state
//! - **StoreState**: value type held by the store and handed to subscribers

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
