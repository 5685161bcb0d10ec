//! Pure functions that fold confirmed server responses into the local list.
//!
//! Callers pass a response only after the server has returned it; nothing
//! here is applied speculatively.

use crate::todo::{
    domain::{Todo, TodoId, newest_first},
    services::DeleteTodoOutput,
};

/// Returns the list after a `getTodos` response.
///
/// The server already orders records newest first; sorting again keeps
/// the invariant for lists built by hand.
#[must_use]
pub fn replace_all(mut fetched: Vec<Todo>) -> Vec<Todo> {
    fetched.sort_by(newest_first);
    fetched
}

/// Prepends a newly created record.
#[must_use]
pub fn apply_created(mut list: Vec<Todo>, created: Todo) -> Vec<Todo> {
    list.retain(|todo| todo.id() != created.id());
    list.insert(0, created);
    list
}

/// Replaces the record with the same identifier as `updated`.
///
/// A `None` response (unknown identifier) leaves the list unchanged.
#[must_use]
pub fn apply_updated(mut list: Vec<Todo>, updated: Option<Todo>) -> Vec<Todo> {
    if let Some(record) = updated {
        if let Some(slot) = list.iter_mut().find(|todo| todo.id() == record.id()) {
            *slot = record;
        }
    }
    list
}

/// Removes `id` when the server reports a successful delete.
#[must_use]
pub fn apply_deleted(mut list: Vec<Todo>, id: TodoId, outcome: DeleteTodoOutput) -> Vec<Todo> {
    if outcome.success {
        list.retain(|todo| todo.id() != id);
    }
    list
}
