//! Todo aggregate root and related lifecycle types.

use super::{TodoId, TodoPatch, TodoTitle};
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Fractional-second digits kept on persisted timestamps (microseconds).
const STORAGE_SUBSEC_DIGITS: u16 = 6;

/// Completion state of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Work on the todo is outstanding.
    Pending,
    /// The todo has been completed.
    Completed,
}

impl TodoStatus {
    /// Maps the persisted completion flag onto a status.
    #[must_use]
    pub const fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }

    /// Returns `true` for [`TodoStatus::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the opposite status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

/// Todo aggregate root.
///
/// Serializes to the wire shape
/// `{ id, title, completed, created_at, updated_at }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: TodoTitle,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: TodoTitle,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        TodoStatus::from_completed(self.completed)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the fields present in `patch` and refreshes `updated_at`.
    ///
    /// The timestamp is refreshed even for an empty patch and always moves
    /// forward, see [`next_update_timestamp`].
    pub fn apply(&mut self, patch: &TodoPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title() {
            self.title = title.clone();
        }
        if let Some(completed) = patch.completed() {
            self.completed = completed;
        }
        self.updated_at = next_update_timestamp(self.updated_at, now);
    }
}

/// Insert draft for a todo that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: TodoTitle,
    created_at: DateTime<Utc>,
}

impl NewTodo {
    /// Creates a pending todo draft stamped with the current clock time.
    #[must_use]
    pub fn new(title: TodoTitle, clock: &impl Clock) -> Self {
        Self {
            title,
            created_at: storage_timestamp(clock),
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// New todos always start pending.
    #[must_use]
    pub const fn completed(&self) -> bool {
        false
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the initial modification timestamp, equal to `created_at`.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Completes the draft with a store-assigned identifier.
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: false,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Returns the current clock time truncated to storage precision.
#[must_use]
pub fn storage_timestamp(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(STORAGE_SUBSEC_DIGITS)
}

/// Computes the `updated_at` value for an update observed at `now`.
///
/// The result is strictly later than `previous`: when the clock has not
/// advanced past it, the previous value plus one microsecond is used.
#[must_use]
pub fn next_update_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous
        .checked_add_signed(TimeDelta::microseconds(1))
        .unwrap_or(previous);
    now.max(floor)
}

/// Listing order: newest `created_at` first, higher id first on ties.
#[must_use]
pub fn newest_first(left: &Todo, right: &Todo) -> Ordering {
    right
        .created_at
        .cmp(&left.created_at)
        .then_with(|| right.id.cmp(&left.id))
}
