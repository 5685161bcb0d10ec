//! Axum routes dispatching RPC calls to the todo service.

use super::{Procedure, ProcedureKind, RpcEnvelope, RpcError};
use crate::todo::{ports::TodoRepository, services::TodoService};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use mockable::Clock;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct QueryParams {
    input: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// Builds the HTTP router for a todo service.
///
/// Routes:
/// - `GET /health` answers `{"status":"ok"}`.
/// - `POST /rpc/{procedure}` calls any procedure with a JSON body.
/// - `GET /rpc/{procedure}?input=<json>` calls a query procedure.
pub fn router<R, C>(service: TodoService<R, C>) -> Router
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/health",
            get(|| async { Json(HealthStatus { status: "ok" }) }),
        )
        .route(
            "/rpc/{procedure}",
            get(query_procedure::<R, C>).post(call_procedure::<R, C>),
        )
        .with_state(service)
}

async fn call_procedure<R, C>(
    State(service): State<TodoService<R, C>>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Response, RpcError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let procedure = Procedure::try_from(name.as_str())?;
    let input = parse_input(procedure, &body)?;
    dispatch(&service, procedure, input).await
}

async fn query_procedure<R, C>(
    State(service): State<TodoService<R, C>>,
    Path(name): Path<String>,
    Query(params): Query<QueryParams>,
) -> Result<Response, RpcError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let procedure = Procedure::try_from(name.as_str())?;
    if procedure.kind() == ProcedureKind::Mutation {
        return Err(RpcError::MethodNotAllowed(procedure));
    }
    let input = match params.input {
        Some(raw) => parse_input(procedure, raw.as_bytes())?,
        None => Value::Null,
    };
    dispatch(&service, procedure, input).await
}

// An empty body means "no input", which only `getTodos` accepts.
fn parse_input(procedure: Procedure, raw: &[u8]) -> Result<Value, RpcError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(raw).map_err(|err| RpcError::invalid_input(procedure, &err))
}

fn decode<T: DeserializeOwned>(procedure: Procedure, input: Value) -> Result<T, RpcError> {
    serde_json::from_value(input).map_err(|err| RpcError::invalid_input(procedure, &err))
}

async fn dispatch<R, C>(
    service: &TodoService<R, C>,
    procedure: Procedure,
    input: Value,
) -> Result<Response, RpcError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    tracing::debug!(procedure = procedure.name(), "dispatching rpc call");
    let response = match procedure {
        Procedure::GetTodos => respond(service.list().await?),
        Procedure::GetTodo => respond(service.get(decode(procedure, input)?).await?),
        Procedure::CreateTodo => respond(service.create(decode(procedure, input)?).await?),
        Procedure::UpdateTodo => respond(service.update(decode(procedure, input)?).await?),
        Procedure::DeleteTodo => respond(service.delete(decode(procedure, input)?).await?),
    };
    Ok(response)
}

fn respond<T: Serialize>(data: T) -> Response {
    Json(RpcEnvelope::success(data)).into_response()
}
