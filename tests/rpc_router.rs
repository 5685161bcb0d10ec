//! HTTP-level tests for the RPC router over the in-memory store.

#![expect(
    clippy::expect_used,
    reason = "Test helpers use expect for assertion clarity"
)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{self, Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use todolist::{
    rpc,
    todo::{adapters::memory::InMemoryTodoRepository, services::TodoService},
};
use tower::ServiceExt;

#[fixture]
fn app() -> Router {
    rpc::router(TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultClock),
    ))
}

fn post(procedure: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(http::Method::POST)
        .uri(format!("/rpc/{procedure}"))
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("body is JSON");
    (status, body)
}

async fn create(app: &Router, title: &str) -> Value {
    let (status, body) = send(app, post("createTodo", &json!({ "title": title }).to_string())).await;
    assert_eq!(status, StatusCode::OK);
    body["result"]["data"].clone()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok(app: Router) {
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_todos_on_empty_store_returns_empty_array(app: Router) {
    let (status, body) = send(&app, post("getTodos", "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": { "data": [] } }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_returns_wire_shaped_todo(app: Router) {
    let todo = create(&app, "  Buy milk  ").await;

    assert_eq!(todo["id"], json!(1));
    assert_eq!(todo["title"], json!("  Buy milk  "));
    assert_eq!(todo["completed"], json!(false));
    assert_eq!(todo["created_at"], todo["updated_at"]);
    assert!(todo["created_at"].is_string());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_todos_lists_newest_first(app: Router) {
    for title in ["A", "B", "C"] {
        create(&app, title).await;
    }

    let (status, body) = send(&app, post("getTodos", "null")).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["result"]["data"]
        .as_array()
        .expect("data is an array")
        .iter()
        .filter_map(|todo| todo["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["C", "B", "A"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn queries_accept_get_with_input_parameter(app: Router) {
    let created = create(&app, "Buy milk").await;

    let (status, body) = send(&app, get("/rpc/getTodo?input=%7B%22id%22%3A1%7D")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["data"], created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_todo_is_null_not_an_error(app: Router) {
    let (get_status, get_body) = send(&app, post("getTodo", r#"{"id":99}"#)).await;
    let (update_status, update_body) =
        send(&app, post("updateTodo", r#"{"id":99,"completed":true}"#)).await;
    let (delete_status, delete_body) = send(&app, post("deleteTodo", r#"{"id":99}"#)).await;

    assert_eq!(get_status, StatusCode::OK);
    assert_eq!(get_body, json!({ "result": { "data": null } }));
    assert_eq!(update_status, StatusCode::OK);
    assert_eq!(update_body, json!({ "result": { "data": null } }));
    assert_eq!(delete_status, StatusCode::OK);
    assert_eq!(
        delete_body,
        json!({ "result": { "data": { "success": false } } })
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_changes_only_supplied_fields(app: Router) {
    create(&app, "Buy milk").await;

    let (status, body) = send(&app, post("updateTodo", r#"{"id":1,"completed":true}"#)).await;

    assert_eq!(status, StatusCode::OK);
    let todo = &body["result"]["data"];
    assert_eq!(todo["title"], json!("Buy milk"));
    assert_eq!(todo["completed"], json!(true));
    assert_ne!(todo["updated_at"], todo["created_at"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_succeeds_once(app: Router) {
    create(&app, "Buy milk").await;

    let (_, first) = send(&app, post("deleteTodo", r#"{"id":1}"#)).await;
    let (_, second) = send(&app, post("deleteTodo", r#"{"id":1}"#)).await;

    assert_eq!(first["result"]["data"]["success"], json!(true));
    assert_eq!(second["result"]["data"]["success"], json!(false));
}

#[rstest]
#[case("createTodo", r#"{"title":""}"#)]
#[case("createTodo", r#"{"title":"   "}"#)]
#[case("createTodo", "{}")]
#[case("createTodo", "{title:")]
#[case("getTodo", r#"{"id":"one"}"#)]
#[case("updateTodo", r#"{"id":1,"completed":"yes"}"#)]
#[case("deleteTodo", "")]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_input_is_a_bad_request(
    app: Router,
    #[case] procedure: &str,
    #[case] body: &str,
) {
    let (status, envelope) = send(&app, post(procedure, body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope["error"]["code"], json!("BAD_REQUEST"));
    assert!(envelope["error"]["message"].is_string());
}

#[rstest]
#[case("a".repeat(256))]
#[case(format!("{}{}", "a".repeat(250), " ".repeat(10)))]
#[tokio::test(flavor = "multi_thread")]
async fn overlong_title_is_rejected(app: Router, #[case] title: String) {
    let (status, envelope) = send(
        &app,
        post("createTodo", &json!({ "title": title }).to_string()),
    )
    .await;
    let (_, listing) = send(&app, post("getTodos", "")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(envelope["error"]["code"], json!("BAD_REQUEST"));
    assert_eq!(listing["result"]["data"], json!([]));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_procedure_is_not_found(app: Router) {
    let (status, envelope) = send(&app, post("dropTables", "{}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(envelope["error"]["code"], json!("NOT_FOUND"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutations_reject_get(app: Router) {
    let (status, envelope) = send(
        &app,
        get("/rpc/createTodo?input=%7B%22title%22%3A%22x%22%7D"),
    )
    .await;
    let (_, listing) = send(&app, post("getTodos", "")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(envelope["error"]["code"], json!("METHOD_NOT_ALLOWED"));
    assert_eq!(listing["result"]["data"], json!([]));
}
