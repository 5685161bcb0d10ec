//! `PostgreSQL` adapters for todo persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CREATE_TODOS_SQL, PostgresTodoRepository, TodoPgPool};
