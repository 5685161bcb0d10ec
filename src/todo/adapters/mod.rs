//! Adapter implementations for todo ports.

pub mod memory;
pub mod postgres;
mod store;

pub use store::TodoStore;
