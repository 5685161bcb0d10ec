//! Validated todo title.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo title between 1 and [`TodoTitle::MAX_LENGTH`] characters long that
/// is not made of whitespace alone.
///
/// The value is stored exactly as supplied; surrounding whitespace is kept.
///
/// Deserialization runs the same validation as [`TodoTitle::new`], so a
/// request carrying an invalid title is rejected before any handler sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Largest accepted title length, counted in characters.
    pub const MAX_LENGTH: usize = 255;

    /// Creates a validated title.
    ///
    /// Both checks run on the value as given.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the value is empty or only
    /// whitespace, or [`TodoDomainError::TitleTooLong`] when it is longer than
    /// [`TodoTitle::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TodoDomainError::EmptyTitle);
        }

        let length = raw.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TodoDomainError::TitleTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TodoTitle {
    type Error = TodoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoTitle> for String {
    fn from(title: TodoTitle) -> Self {
        title.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
