//! Response envelope shared by the server and the client.

use serde::{Deserialize, Serialize};

/// Outcome of one RPC call as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcEnvelope<T> {
    /// Successful call: `{"result":{"data":…}}`.
    Success {
        /// Wrapped procedure output.
        result: RpcData<T>,
    },
    /// Failed call: `{"error":{"code":…,"message":…}}`.
    Failure {
        /// Error description.
        error: RpcErrorBody,
    },
}

/// Procedure output wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcData<T> {
    /// Procedure output.
    pub data: T,
}

/// Error description carried by a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorBody {
    /// Machine-readable code such as `BAD_REQUEST`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl<T> RpcEnvelope<T> {
    /// Wraps a procedure output.
    pub const fn success(data: T) -> Self {
        Self::Success {
            result: RpcData { data },
        }
    }

    /// Builds a failure envelope.
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            error: RpcErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }

    /// Converts the envelope into the procedure output or the error body.
    ///
    /// # Errors
    ///
    /// Returns the [`RpcErrorBody`] of a failure envelope.
    pub fn into_result(self) -> Result<T, RpcErrorBody> {
        match self {
            Self::Success { result } => Ok(result.data),
            Self::Failure { error } => Err(error),
        }
    }
}
