//! Diesel row models for todo persistence.

use super::schema::todos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Store-assigned identifier.
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub id: i32,
    /// Title text.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub title: String,
    /// Completion flag.
    #[diesel(sql_type = diesel::sql_types::Bool)]
    pub completed: bool,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub updated_at: DateTime<Utc>,
}

/// Insert model for todo records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Title text.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
