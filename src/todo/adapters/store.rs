//! Runtime-selected todo store with an explicit open/close lifecycle.

use super::{memory::InMemoryTodoRepository, postgres::PostgresTodoRepository};
use crate::config::StoreConfig;
use crate::todo::{
    domain::{NewTodo, Todo, TodoId, TodoPatch},
    ports::{TodoRepository, TodoRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Store handle opened at process start and closed at shutdown.
#[derive(Debug, Clone)]
pub enum TodoStore {
    /// Process-local store.
    Memory(InMemoryTodoRepository),
    /// `PostgreSQL` store.
    Postgres(PostgresTodoRepository),
}

impl TodoStore {
    /// Opens the store described by `config`.
    ///
    /// For `PostgreSQL` this builds the connection pool and applies the
    /// schema before returning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::todo::ports::TodoRepositoryError`] when the database
    /// cannot be reached or prepared.
    pub async fn open(config: &StoreConfig) -> TodoRepositoryResult<Self> {
        let store = match config {
            StoreConfig::Memory => Self::Memory(InMemoryTodoRepository::new()),
            StoreConfig::Postgres {
                database_url,
                pool_size,
            } => Self::Postgres(PostgresTodoRepository::connect(database_url, *pool_size).await?),
        };
        tracing::info!(backend = store.backend_name(), "todo store opened");
        Ok(store)
    }

    /// Returns a short name of the backing store.
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }

    /// Closes the store by dropping the last shared handle.
    ///
    /// Dropping the final handle of a `PostgreSQL` store drops its pool, which
    /// closes every pooled connection. Returns `false` and leaves the store
    /// open when another handle is still alive, for example while a service
    /// built over it has not been dropped yet.
    #[must_use]
    pub fn close(store: Arc<Self>) -> bool {
        let backend = store.backend_name();
        match Arc::into_inner(store) {
            Some(last) => {
                drop(last);
                tracing::info!(backend, "todo store closed");
                true
            }
            None => {
                tracing::warn!(backend, "todo store still shared at close");
                false
            }
        }
    }
}

#[async_trait]
impl TodoRepository for TodoStore {
    async fn insert(&self, todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        match self {
            Self::Memory(repository) => repository.insert(todo).await,
            Self::Postgres(repository) => repository.insert(todo).await,
        }
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        match self {
            Self::Memory(repository) => repository.find_all().await,
            Self::Postgres(repository) => repository.find_all().await,
        }
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        match self {
            Self::Memory(repository) => repository.find_by_id(id).await,
            Self::Postgres(repository) => repository.find_by_id(id).await,
        }
    }

    async fn update(
        &self,
        id: TodoId,
        patch: &TodoPatch,
        now: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<Todo>> {
        match self {
            Self::Memory(repository) => repository.update(id, patch, now).await,
            Self::Postgres(repository) => repository.update(id, patch, now).await,
        }
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        match self {
            Self::Memory(repository) => repository.delete(id).await,
            Self::Postgres(repository) => repository.delete(id).await,
        }
    }
}
