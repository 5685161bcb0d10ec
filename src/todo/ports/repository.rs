//! Repository port for todo persistence and lookup.

use crate::todo::domain::{NewTodo, Todo, TodoId, TodoPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Every operation maps onto a single store statement. Missing records are
/// reported as `None` or `false`, never as errors.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts a new todo and returns it with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError`] when the store rejects the insert.
    async fn insert(&self, todo: &NewTodo) -> TodoRepositoryResult<Todo>;

    /// Returns every todo, newest `created_at` first.
    ///
    /// Ties on `created_at` are ordered by descending identifier.
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Applies `patch` to the todo and refreshes its `updated_at`.
    ///
    /// The new timestamp is `now`, or one microsecond past the previous
    /// value when `now` is not later. Returns `None` when the todo does not
    /// exist.
    async fn update(
        &self,
        id: TodoId,
        patch: &TodoPatch,
        now: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<Todo>>;

    /// Deletes a todo.
    ///
    /// Returns `true` when a record was removed and `false` when none
    /// matched.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The store cannot assign further identifiers.
    #[error("todo identifier space exhausted")]
    IdentifiersExhausted,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
