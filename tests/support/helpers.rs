// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use posts_core::application::{
    commands::posts::CreatePostCommand, ports::time::Clock, services::PostLifecycleManager,
};
use posts_core::domain::post::PostRepository;
use posts_core::infrastructure::{
    repositories::InMemoryPostRepository, util::TitleSlugGenerator,
};
use posts_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn manager_over(repo: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> PostLifecycleManager {
    PostLifecycleManager::new(repo, clock, Arc::new(TitleSlugGenerator))
}

/// Lifecycle manager over a fresh in-memory store and a stepping clock.
pub fn in_memory_manager() -> (Arc<InMemoryPostRepository>, PostLifecycleManager) {
    let clock: Arc<dyn Clock> = Arc::new(mocks::SteppingClock::new());
    let repo = Arc::new(InMemoryPostRepository::new(Arc::clone(&clock)));
    let manager = manager_over(repo.clone(), clock);
    (repo, manager)
}

pub fn create_command(title: &str) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .build()
        .expect("title is set")
}

pub fn make_test_router() -> axum::Router {
    let (_repo, manager) = in_memory_manager();
    build_router(HttpState {
        services: Arc::new(manager),
    })
}

pub fn json_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}
