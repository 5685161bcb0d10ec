//! HTTP transport for the todo procedures.

use super::ClientError;
use crate::{
    rpc::{Procedure, RpcEnvelope},
    todo::{
        domain::{Todo, TodoId, TodoTitle},
        services::{
            CreateTodoInput, DeleteTodoInput, DeleteTodoOutput, GetTodoInput, UpdateTodoInput,
        },
    },
};
use serde::{Serialize, de::DeserializeOwned};

/// Typed client for the todo RPC server.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    base_url: String,
}

impl RpcClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client that sends requests through `http`.
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let trimmed = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http,
            base_url: trimmed,
        }
    }

    /// Returns the server base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Calls `procedure` with `input` and decodes its output.
    ///
    /// Every call is sent as `POST`. The envelope is decoded whatever the
    /// HTTP status, so server-reported failures keep their code and message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the request fails,
    /// [`ClientError::Decode`] when the body is not an envelope, and
    /// [`ClientError::Rpc`] when the server reports an error.
    pub async fn call<I, O>(&self, procedure: Procedure, input: &I) -> Result<O, ClientError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        let url = format!("{}/rpc/{}", self.base_url, procedure.name());
        let response = self.http.post(url).json(input).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let envelope: RpcEnvelope<O> = serde_json::from_slice(&body)?;
        envelope.into_result().map_err(|error| {
            tracing::debug!(%procedure, %status, code = %error.code, "rpc call failed");
            ClientError::Rpc {
                code: error.code,
                message: error.message,
            }
        })
    }

    /// Fetches every todo, newest first.
    ///
    /// # Errors
    ///
    /// See [`RpcClient::call`].
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.call(Procedure::GetTodos, &()).await
    }

    /// Fetches one todo, `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// See [`RpcClient::call`].
    pub async fn get_todo(&self, id: TodoId) -> Result<Option<Todo>, ClientError> {
        self.call(Procedure::GetTodo, &GetTodoInput { id }).await
    }

    /// Creates a todo.
    ///
    /// # Errors
    ///
    /// See [`RpcClient::call`].
    pub async fn create_todo(&self, title: TodoTitle) -> Result<Todo, ClientError> {
        self.call(Procedure::CreateTodo, &CreateTodoInput { title })
            .await
    }

    /// Applies a patch, `None` when the todo does not exist.
    ///
    /// # Errors
    ///
    /// See [`RpcClient::call`].
    pub async fn update_todo(&self, input: &UpdateTodoInput) -> Result<Option<Todo>, ClientError> {
        self.call(Procedure::UpdateTodo, input).await
    }

    /// Deletes a todo.
    ///
    /// # Errors
    ///
    /// See [`RpcClient::call`].
    pub async fn delete_todo(&self, id: TodoId) -> Result<DeleteTodoOutput, ClientError> {
        self.call(Procedure::DeleteTodo, &DeleteTodoInput { id })
            .await
    }
}
