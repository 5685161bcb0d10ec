//! Unit tests for todo records, storage, and handlers.
