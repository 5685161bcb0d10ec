//! Todolist: a small todo service with an RPC surface and a terminal client.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: The five request handlers
//!
//! # Modules
//!
//! - [`todo`]: Todo records, storage, and handlers
//! - [`rpc`]: HTTP routes exposing the handlers as named procedures
//! - [`client`]: RPC client and the reconciled client-side list
//! - [`config`]: Command-line and environment settings
//! - [`telemetry`]: Logging setup

pub mod client;
pub mod config;
pub mod rpc;
pub mod telemetry;
pub mod todo;
