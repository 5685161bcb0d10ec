//! Names and kinds of the remotely callable procedures.

use std::fmt;
use thiserror::Error;

/// Remotely callable todo procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    /// Lists every todo.
    GetTodos,
    /// Fetches one todo by identifier.
    GetTodo,
    /// Creates a todo.
    CreateTodo,
    /// Applies a patch to a todo.
    UpdateTodo,
    /// Deletes a todo.
    DeleteTodo,
}

/// Whether a procedure reads or changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcedureKind {
    /// Read-only; callable with `GET` or `POST`.
    Query,
    /// State-changing; callable with `POST` only.
    Mutation,
}

impl Procedure {
    /// Every procedure, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::GetTodos,
        Self::GetTodo,
        Self::CreateTodo,
        Self::UpdateTodo,
        Self::DeleteTodo,
    ];

    /// Returns the wire name used in the request path.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetTodos => "getTodos",
            Self::GetTodo => "getTodo",
            Self::CreateTodo => "createTodo",
            Self::UpdateTodo => "updateTodo",
            Self::DeleteTodo => "deleteTodo",
        }
    }

    /// Returns whether the procedure is a query or a mutation.
    #[must_use]
    pub const fn kind(self) -> ProcedureKind {
        match self {
            Self::GetTodos | Self::GetTodo => ProcedureKind::Query,
            Self::CreateTodo | Self::UpdateTodo | Self::DeleteTodo => ProcedureKind::Mutation,
        }
    }
}

impl TryFrom<&str> for Procedure {
    type Error = UnknownProcedureError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|procedure| procedure.name() == value)
            .ok_or_else(|| UnknownProcedureError(value.to_owned()))
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a procedure name that is not served.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown procedure '{0}'")]
pub struct UnknownProcedureError(pub String);
