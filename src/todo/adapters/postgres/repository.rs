//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{NewTodo, PersistedTodoData, Todo, TodoId, TodoPatch, TodoTitle},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_types::{Bool, Integer, Nullable, Text, Timestamptz};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent schema setup for the `todos` table.
pub const CREATE_TODOS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_todos/up.sql");

// Patch and timestamp bump happen in one statement so concurrent updates
// stay last-write-wins without a read-modify-write window.
const UPDATE_TODO_SQL: &str = concat!(
    "UPDATE todos SET ",
    "title = COALESCE($2, title), ",
    "completed = COALESCE($3, completed), ",
    "updated_at = GREATEST($4, updated_at + INTERVAL '1 microsecond') ",
    "WHERE id = $1 ",
    "RETURNING id, title, completed, created_at, updated_at",
);

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Builds a pool for `database_url` and applies the schema.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the pool cannot
    /// establish connections or the schema cannot be applied.
    pub async fn connect(database_url: &str, pool_size: u32) -> TodoRepositoryResult<Self> {
        let url = database_url.to_owned();
        let pool = tokio::task::spawn_blocking(move || {
            let manager = ConnectionManager::<PgConnection>::new(url);
            Pool::builder()
                .max_size(pool_size)
                .build(manager)
                .map_err(TodoRepositoryError::persistence)
        })
        .await
        .map_err(TodoRepositoryError::persistence)??;

        let repository = Self::new(pool);
        repository.migrate().await?;
        Ok(repository)
    }

    /// Creates the `todos` table and its index when they do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the schema
    /// statements fail.
    pub async fn migrate(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TODOS_SQL)
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        let new_row = to_new_row(todo);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            row_to_todo(row)
        })
        .await
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .order((todos::created_at.desc(), todos::id.desc()))
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.value()))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn update(
        &self,
        id: TodoId,
        patch: &TodoPatch,
        now: DateTime<Utc>,
    ) -> TodoRepositoryResult<Option<Todo>> {
        let title = patch.title().map(|title| title.as_str().to_owned());
        let completed = patch.completed();
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(UPDATE_TODO_SQL)
                .bind::<Integer, _>(id.value())
                .bind::<Nullable<Text>, _>(title)
                .bind::<Nullable<Bool>, _>(completed)
                .bind::<Timestamptz, _>(now)
                .get_result::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(todos::table.filter(todos::id.eq(id.value())))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(deleted == 1)
        })
        .await
    }
}

fn to_new_row(todo: &NewTodo) -> NewTodoRow {
    NewTodoRow {
        title: todo.title().as_str().to_owned(),
        completed: todo.completed(),
        created_at: todo.created_at(),
        updated_at: todo.updated_at(),
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        title: persisted_title,
        completed,
        created_at,
        updated_at,
    } = row;

    let title = TodoTitle::new(persisted_title).map_err(TodoRepositoryError::persistence)?;
    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        title,
        completed,
        created_at,
        updated_at,
    }))
}
