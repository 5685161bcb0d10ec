//! HTTP RPC surface for the todo handlers.
//!
//! Each handler is exposed as a named procedure under `/rpc/{procedure}`.
//! Inputs travel as JSON in the request body, or in the `input` query
//! parameter for queries called with `GET`. Responses use the envelope in
//! [`envelope`]: `{"result":{"data":…}}` on success and
//! `{"error":{"code":…,"message":…}}` on failure.

pub mod envelope;
mod error;
pub mod procedure;
mod router;
mod server;

pub use envelope::{RpcData, RpcEnvelope, RpcErrorBody};
pub use error::RpcError;
pub use procedure::{Procedure, ProcedureKind, UnknownProcedureError};
pub use router::router;
pub use server::{serve, shutdown_signal};
