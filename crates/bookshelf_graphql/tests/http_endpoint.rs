use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use bookshelf_core::db::open_db_in_memory;
use bookshelf_core::DbHandle;
use bookshelf_graphql::{build_schema, router, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(config: &ServerConfig) -> Router {
    let db = DbHandle::new(open_db_in_memory().unwrap());
    router(build_schema(db), config)
}

async fn post_graphql(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn post_graphql_returns_standard_envelope() {
    let app = app(&ServerConfig::default());

    let (status, body) = post_graphql(
        app.clone(),
        json!({
            "query": "mutation($data: BookUpdateInput!) { createBook(data: $data) { title publishedDate } }",
            "variables": { "data": { "title": "Dune", "author": "Frank Herbert", "publishedDate": "1965-08-01" } }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": { "createBook": { "title": "Dune", "publishedDate": "1965-08-01" } } })
    );

    let (_, body) = post_graphql(app, json!({ "query": "{ books { title author } }" })).await;
    assert_eq!(
        body["data"]["books"],
        json!([{ "title": "Dune", "author": "Frank Herbert" }])
    );
}

#[tokio::test]
async fn invalid_document_reports_errors_array() {
    let app = app(&ServerConfig::default());

    let (status, body) = post_graphql(app, json!({ "query": "{ shelves { id } }" })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
}

#[tokio::test]
async fn health_probe_answers_ok() {
    let app = app(&ServerConfig::default());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn graphiql_page_can_be_disabled() {
    let enabled = app(&ServerConfig::default());
    let response = enabled
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disabled = app(&ServerConfig {
        graphiql: false,
        ..ServerConfig::default()
    });
    let response = disabled
        .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn server_config_defaults_apply_to_partial_json() {
    let config: ServerConfig = serde_json::from_value(json!({ "port": 9090 })).unwrap();

    assert_eq!(config.socket_addr(), "127.0.0.1:9090");
    assert!(config.graphiql);
}
