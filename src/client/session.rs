//! Client session holding the reconciled todo list.

use super::{ClientError, RpcClient, reconcile};
use crate::todo::{
    domain::{Todo, TodoId, TodoTitle},
    services::UpdateTodoInput,
};

/// Local todo list kept in step with the server.
///
/// Every operation calls the server first and folds the confirmed response
/// into the list. A failed call is logged and leaves the list as it was.
#[derive(Debug, Clone)]
pub struct TodoSession {
    client: RpcClient,
    todos: Vec<Todo>,
}

impl TodoSession {
    /// Creates a session with an empty local list.
    #[must_use]
    pub const fn new(client: RpcClient) -> Self {
        Self {
            client,
            todos: Vec::new(),
        }
    }

    /// Returns the local list, newest first.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Replaces the local list with the server's.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] of a failed call.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let fetched = self
            .client
            .list_todos()
            .await
            .inspect_err(|err| log_failure("load", err))?;
        self.todos = reconcile::replace_all(fetched);
        Ok(())
    }

    /// Creates a todo from a raw title.
    ///
    /// Surrounding whitespace is removed and the title validated before any
    /// call is made.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidTitle`] for a blank or overlong title,
    /// or the [`ClientError`] of a failed call.
    pub async fn add(&mut self, raw_title: &str) -> Result<Todo, ClientError> {
        let title = TodoTitle::new(raw_title.trim()).inspect_err(|err| {
            tracing::warn!(error = %err, "title rejected before sending");
        })?;
        let created = self
            .client
            .create_todo(title)
            .await
            .inspect_err(|err| log_failure("add", err))?;
        self.todos = reconcile::apply_created(std::mem::take(&mut self.todos), created.clone());
        Ok(created)
    }

    /// Flips the completion flag of a todo in the local list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownTodo`] when the todo is not in the local
    /// list or no longer exists on the server, or the [`ClientError`] of a
    /// failed call.
    pub async fn toggle(&mut self, id: TodoId) -> Result<Todo, ClientError> {
        let completed = self
            .todos
            .iter()
            .find(|todo| todo.id() == id)
            .map(|todo| todo.status().toggled().is_completed())
            .ok_or(ClientError::UnknownTodo(id))?;
        self.set_completed(id, completed).await
    }

    /// Sets the completion flag of a todo.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownTodo`] when the todo does not exist, or
    /// the [`ClientError`] of a failed call.
    pub async fn set_completed(&mut self, id: TodoId, completed: bool) -> Result<Todo, ClientError> {
        self.update(&UpdateTodoInput::new(id).with_completed(completed))
            .await
    }

    /// Replaces the title of a todo.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidTitle`] for a blank or overlong title,
    /// [`ClientError::UnknownTodo`] when the todo does not exist, or the
    /// [`ClientError`] of a failed call.
    pub async fn rename(&mut self, id: TodoId, raw_title: &str) -> Result<Todo, ClientError> {
        let title = TodoTitle::new(raw_title.trim()).inspect_err(|err| {
            tracing::warn!(error = %err, "title rejected before sending");
        })?;
        self.update(&UpdateTodoInput::new(id).with_title(title))
            .await
    }

    /// Deletes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownTodo`] when the server reports that
    /// nothing was deleted, or the [`ClientError`] of a failed call.
    pub async fn remove(&mut self, id: TodoId) -> Result<(), ClientError> {
        let outcome = self
            .client
            .delete_todo(id)
            .await
            .inspect_err(|err| log_failure("remove", err))?;
        self.todos = reconcile::apply_deleted(std::mem::take(&mut self.todos), id, outcome);
        if outcome.success {
            Ok(())
        } else {
            Err(ClientError::UnknownTodo(id))
        }
    }

    /// Fetches one todo from the server without changing the local list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnknownTodo`] when the todo does not exist, or
    /// the [`ClientError`] of a failed call.
    pub async fn show(&self, id: TodoId) -> Result<Todo, ClientError> {
        self.client
            .get_todo(id)
            .await
            .inspect_err(|err| log_failure("show", err))?
            .ok_or(ClientError::UnknownTodo(id))
    }

    async fn update(&mut self, input: &UpdateTodoInput) -> Result<Todo, ClientError> {
        let id = input.id;
        let updated = self
            .client
            .update_todo(input)
            .await
            .inspect_err(|err| log_failure("update", err))?;
        self.todos = reconcile::apply_updated(std::mem::take(&mut self.todos), updated.clone());
        updated.ok_or(ClientError::UnknownTodo(id))
    }
}

fn log_failure(operation: &'static str, err: &ClientError) {
    tracing::error!(operation, error = %err, "todo rpc call failed");
}
