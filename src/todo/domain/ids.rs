//! Identifier type for todo records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a todo record.
///
/// Identifiers are generated by the store on insert and never change. Any
/// integer is a well-formed identifier; ids the store never assigned simply
/// resolve to no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i32);

impl TodoId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for TodoId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
