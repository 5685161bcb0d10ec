//! Boundary errors and their HTTP mapping.

use super::{Procedure, RpcEnvelope, UnknownProcedureError};
use crate::todo::services::TodoServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned to RPC callers.
#[derive(Debug, Error)]
pub enum RpcError {
    /// No procedure with the requested name exists.
    #[error(transparent)]
    UnknownProcedure(#[from] UnknownProcedureError),

    /// A mutation was called with `GET`.
    #[error("procedure '{0}' is a mutation and must be called with POST")]
    MethodNotAllowed(Procedure),

    /// The input could not be decoded or failed validation.
    #[error("invalid input for '{procedure}': {message}")]
    InvalidInput {
        /// Procedure that rejected the input.
        procedure: Procedure,
        /// Decoder or validation message.
        message: String,
    },

    /// A handler failed.
    #[error(transparent)]
    Service(#[from] TodoServiceError),
}

impl RpcError {
    /// Builds an [`RpcError::InvalidInput`] from a decoding error.
    pub fn invalid_input(procedure: Procedure, err: &impl std::fmt::Display) -> Self {
        Self::InvalidInput {
            procedure,
            message: err.to_string(),
        }
    }

    /// Returns the wire error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownProcedure(_) => "NOT_FOUND",
            Self::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            Self::InvalidInput { .. } => "BAD_REQUEST",
            Self::Service(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Returns the HTTP status of the error response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnknownProcedure(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Store failures were logged by the service; callers get no detail.
    fn public_message(&self) -> String {
        match self {
            Self::Service(_) => "internal server error".to_owned(),
            Self::UnknownProcedure(_) | Self::MethodNotAllowed(_) | Self::InvalidInput { .. } => {
                self.to_string()
            }
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), error = %self, "rpc call rejected");
        let body = RpcEnvelope::<()>::failure(self.code(), self.public_message());
        (self.status(), Json(body)).into_response()
    }
}
