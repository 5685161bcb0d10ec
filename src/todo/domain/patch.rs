//! Partial update of a todo record.

use super::TodoTitle;

/// Fields to replace on an existing todo.
///
/// `None` leaves the field untouched; `Some(false)` for `completed` is a real
/// change, distinct from "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    title: Option<TodoTitle>,
    completed: Option<bool>,
}

impl TodoPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: TodoTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the replacement completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Returns the replacement title, if any.
    #[must_use]
    pub const fn title(&self) -> Option<&TodoTitle> {
        self.title.as_ref()
    }

    /// Returns the replacement completion flag, if any.
    #[must_use]
    pub const fn completed(&self) -> Option<bool> {
        self.completed
    }

    /// Returns `true` when the patch changes no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}
