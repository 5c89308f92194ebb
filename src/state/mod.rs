//! Client state layer: action factory, reducers and the store.

pub mod actions;
pub mod mvi;
pub mod reducers;
pub mod store;

pub use store::{Dispatch, Store};
