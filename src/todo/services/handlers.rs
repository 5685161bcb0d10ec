//! Service layer exposing the five todo handlers.

use crate::todo::{
    domain::{NewTodo, Todo, storage_timestamp},
    ports::{TodoRepository, TodoRepositoryError},
    services::{CreateTodoInput, DeleteTodoInput, DeleteTodoOutput, GetTodoInput, UpdateTodoInput},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for todo handlers.
///
/// Missing records are not errors; they surface as `None` or
/// `success: false`.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Stateless todo handlers over an injected repository and clock.
pub struct TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists every todo, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> TodoServiceResult<Vec<Todo>> {
        let todos = self
            .repository
            .find_all()
            .await
            .inspect_err(|err| log_store_failure("list", err))?;
        tracing::debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    /// Fetches one todo.
    ///
    /// Returns `Ok(None)` when no todo has the requested identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, input: GetTodoInput) -> TodoServiceResult<Option<Todo>> {
        let todo = self
            .repository
            .find_by_id(input.id)
            .await
            .inspect_err(|err| log_store_failure("get", err))?;
        if todo.is_none() {
            tracing::debug!(id = %input.id, "todo not found");
        }
        Ok(todo)
    }

    /// Creates a pending todo stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store rejects the
    /// insert.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, input: CreateTodoInput) -> TodoServiceResult<Todo> {
        let draft = NewTodo::new(input.title, &*self.clock);
        let todo = self
            .repository
            .insert(&draft)
            .await
            .inspect_err(|err| log_store_failure("create", err))?;
        tracing::info!(id = %todo.id(), "todo created");
        Ok(todo)
    }

    /// Applies the fields present in `input` and refreshes `updated_at`.
    ///
    /// Returns `Ok(None)` when no todo has the requested identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    #[tracing::instrument(skip(self))]
    pub async fn update(&self, input: UpdateTodoInput) -> TodoServiceResult<Option<Todo>> {
        let now = storage_timestamp(&*self.clock);
        let todo = self
            .repository
            .update(input.id, &input.patch(), now)
            .await
            .inspect_err(|err| log_store_failure("update", err))?;
        match &todo {
            Some(updated) => tracing::info!(id = %updated.id(), "todo updated"),
            None => tracing::debug!(id = %input.id, "todo not found"),
        }
        Ok(todo)
    }

    /// Deletes a todo.
    ///
    /// Deleting an identifier that does not exist reports
    /// `success: false`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, input: DeleteTodoInput) -> TodoServiceResult<DeleteTodoOutput> {
        let success = self
            .repository
            .delete(input.id)
            .await
            .inspect_err(|err| log_store_failure("delete", err))?;
        if success {
            tracing::info!(id = %input.id, "todo deleted");
        } else {
            tracing::debug!(id = %input.id, "todo not found");
        }
        Ok(DeleteTodoOutput { success })
    }
}

fn log_store_failure(operation: &'static str, err: &TodoRepositoryError) {
    tracing::error!(operation, error = %err, "todo store operation failed");
}
