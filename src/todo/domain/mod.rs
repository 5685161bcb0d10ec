//! Domain model for todo records.
//!
//! Titles are validated on construction, patches carry only the fields to
//! change, and timestamps are kept at the precision the store can persist.

mod error;
mod ids;
mod patch;
mod title;
mod todo;

pub use error::TodoDomainError;
pub use ids::TodoId;
pub use patch::TodoPatch;
pub use title::TodoTitle;
pub use todo::{
    NewTodo, PersistedTodoData, Todo, TodoStatus, newest_first, next_update_timestamp,
    storage_timestamp,
};
