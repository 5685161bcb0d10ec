//! Request handlers for todo records.

mod handlers;
mod requests;

pub use handlers::{TodoService, TodoServiceError, TodoServiceResult};
pub use requests::{
    CreateTodoInput, DeleteTodoInput, DeleteTodoOutput, GetTodoInput, UpdateTodoInput,
};
