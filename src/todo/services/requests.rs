//! Typed handler inputs and outputs.
//!
//! These types double as the RPC wire shapes. Titles are validated while
//! deserializing, so a handler only ever receives well-formed input.

use crate::todo::domain::{TodoId, TodoPatch, TodoTitle};
use serde::{Deserialize, Serialize};

/// Input of the get-by-id handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTodoInput {
    /// Identifier to look up.
    pub id: TodoId,
}

/// Input of the create handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoInput {
    /// Title of the new todo.
    pub title: TodoTitle,
}

/// Input of the update handler.
///
/// Absent fields are left unchanged on the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoInput {
    /// Identifier of the todo to update.
    pub id: TodoId,
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TodoTitle>,
    /// Replacement completion flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodoInput {
    /// Creates an update that changes nothing but the timestamp.
    #[must_use]
    pub const fn new(id: TodoId) -> Self {
        Self {
            id,
            title: None,
            completed: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TodoTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns the field patch carried by this input.
    #[must_use]
    pub fn patch(&self) -> TodoPatch {
        let mut patch = TodoPatch::new();
        if let Some(title) = &self.title {
            patch = patch.with_title(title.clone());
        }
        if let Some(completed) = self.completed {
            patch = patch.with_completed(completed);
        }
        patch
    }
}

/// Input of the delete handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTodoInput {
    /// Identifier of the todo to delete.
    pub id: TodoId,
}

/// Output of the delete handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTodoOutput {
    /// `true` when a record was removed, `false` when none matched.
    pub success: bool,
}
