//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing domain todo values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title is empty or only whitespace.
    #[error("todo title must not be empty")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("todo title is {length} characters long, expected at most {max}")]
    TitleTooLong {
        /// Length of the rejected title in characters.
        length: usize,
        /// Largest accepted length in characters.
        max: usize,
    },
}
