//! In-memory repository for todo records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::todo::{
    domain::{NewTodo, Todo, TodoId, TodoPatch, newest_first},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers are assigned sequentially from 1, mirroring a `SERIAL`
/// column. Each operation holds the lock for its whole duration, so every
/// call behaves as one atomic statement.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i32,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(err: &PoisonError<T>) -> TodoRepositoryError {
    TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn insert(&self, todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or(TodoRepositoryError::IdentifiersExhausted)?;
        state.last_id = id;

        let stored = todo.clone().into_todo(TodoId::new(id));
        state.todos.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        let mut todos: Vec<Todo> = state.todos.values().cloned().collect();
        todos.sort_by(newest_first);
        Ok(todos)
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn update(
        &self,
        id: TodoId,
        patch: &TodoPatch,
        now: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<Todo>> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        let Some(todo) = state.todos.get_mut(&id) else {
            return Ok(None);
        };
        todo.apply(patch, now);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        Ok(state.todos.remove(&id).is_some())
    }
}
