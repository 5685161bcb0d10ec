//! Client-side error types.

use crate::todo::domain::{TodoDomainError, TodoId};
use thiserror::Error;

/// Errors raised by the RPC client and the client session.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request could not be completed.
    #[error("request to the todo server failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a valid envelope.
    #[error("failed to decode the server response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with an error envelope.
    #[error("server rejected the call ({code}): {message}")]
    Rpc {
        /// Wire error code, such as `BAD_REQUEST`.
        code: String,
        /// Server-provided description.
        message: String,
    },

    /// A title was rejected before any call was made.
    #[error(transparent)]
    InvalidTitle(#[from] TodoDomainError),

    /// No todo with the identifier exists.
    #[error("todo {0} does not exist")]
    UnknownTodo(TodoId),
}
