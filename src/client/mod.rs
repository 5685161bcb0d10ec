//! Terminal-side view of the todo list.
//!
//! [`RpcClient`] calls the server procedures over HTTP. [`TodoSession`]
//! keeps the local list and changes it only through the pure functions in
//! [`reconcile`], after the server has confirmed each call. [`view`]
//! renders the list as text.

mod error;
pub mod reconcile;
mod session;
mod transport;
pub mod view;

pub use error::ClientError;
pub use session::TodoSession;
pub use transport::RpcClient;
