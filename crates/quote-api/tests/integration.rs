//! Integration tests: generate, read back, validation, per-call failures.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use quote_api::server::{self, AppState};
use quote_gen::LlmQuoteGenerator;
use quote_llm::{GenerationParams, MockLlmClient};
use quote_store::InMemoryQuoteStore;
use quote_types::{QuoteStore, RequestLimits};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

struct TestApp {
    router: axum::Router,
    llm: Arc<MockLlmClient>,
    store: Arc<InMemoryQuoteStore>,
}

fn test_app_with(llm: MockLlmClient, limits: RequestLimits) -> TestApp {
    let llm = Arc::new(llm);
    let store = Arc::new(InMemoryQuoteStore::new());
    let generator = LlmQuoteGenerator::new(Arc::clone(&llm), GenerationParams::default());
    let state = Arc::new(AppState {
        generator: Arc::new(generator),
        store: Arc::clone(&store) as Arc<dyn QuoteStore + Send + Sync>,
        limits,
    });
    TestApp {
        router: server::router(state),
        llm,
        store,
    }
}

fn test_app() -> TestApp {
    test_app_with(MockLlmClient::new("Quote N"), RequestLimits::default())
}

async fn post_generate(app: &TestApp, body: String) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/generate-quote")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    let res = app.router.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let body = res.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_quotes(app: &TestApp) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("GET")
        .uri("/get-quotes")
        .body(Body::empty())
        .unwrap();
    let res = app.router.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let body = res.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn generate_then_get_quotes() {
    let app = test_app();
    let body = json!({
        "event_name": "Math Exam",
        "event_description": "Algebra and calculus final",
        "category": "education",
        "number": 2
    });
    let (status, j) = post_generate(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(j, json!({ "quotes": ["Quote N", "Quote N"] }));
    assert_eq!(app.llm.calls(), 2);

    let (status, j) = get_quotes(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(j, json!({ "quotes": ["Quote N", "Quote N"] }));
}

#[tokio::test]
async fn get_quotes_before_any_post_returns_message() {
    let app = test_app();
    let (status, j) = get_quotes(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        j,
        json!({ "message": "No quotes available yet. Please generate quotes via POST." })
    );
}

#[tokio::test]
async fn missing_category_is_rejected_without_calls() {
    let app = test_app();
    let body = json!({
        "event_name": "Math Exam",
        "event_description": "Algebra and calculus final",
        "number": 2
    });
    let (status, j) = post_generate(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        j,
        json!({ "error": "Missing required parameters: event_name, event_description, or category" })
    );
    assert_eq!(app.llm.calls(), 0);
    assert!(app.store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_required_field_is_rejected() {
    let app = test_app();
    let body = json!({ "event_name": "", "event_description": "d", "category": "c" });
    let (status, j) = post_generate(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        j["error"],
        "Missing required parameters: event_name, event_description, or category"
    );
    assert_eq!(app.llm.calls(), 0);
}

#[tokio::test]
async fn number_defaults_to_one() {
    let app = test_app();
    let body = json!({ "event_name": "n", "event_description": "d", "category": "c" });
    let (status, j) = post_generate(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(j["quotes"].as_array().unwrap().len(), 1);
    assert_eq!(app.llm.calls(), 1);
}

#[tokio::test]
async fn number_out_of_range_is_rejected() {
    let limits = RequestLimits {
        max_quotes_per_request: 3,
        ..RequestLimits::default()
    };
    let app = test_app_with(MockLlmClient::new("Quote N"), limits);
    for n in [0, 4] {
        let body = json!({ "event_name": "n", "event_description": "d", "category": "c", "number": n });
        let (status, j) = post_generate(&app, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(j["error"], "number must be between 1 and 3");
    }
    assert_eq!(app.llm.calls(), 0);
}

#[tokio::test]
async fn non_numeric_number_is_a_bad_request() {
    let app = test_app();
    let body = json!({ "event_name": "n", "event_description": "d", "category": "c", "number": "two" });
    let (status, j) = post_generate(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(j["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    assert_eq!(app.llm.calls(), 0);
}

#[tokio::test]
async fn non_string_text_field_is_a_bad_request() {
    let app = test_app();
    let body = json!({ "event_name": 5, "event_description": "d", "category": "c" });
    let (status, j) = post_generate(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(j["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    assert_eq!(app.llm.calls(), 0);
    assert!(app.store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = test_app();
    let (status, j) = post_generate(&app, "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(j["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn per_call_failure_is_inline_and_response_is_ok() {
    let app = test_app_with(
        MockLlmClient::new("Quote N").failing_on([2]),
        RequestLimits::default(),
    );
    let body = json!({ "event_name": "n", "event_description": "d", "category": "c", "number": 3 });
    let (status, j) = post_generate(&app, body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let quotes = j["quotes"].as_array().unwrap();
    assert_eq!(quotes.len(), 3);
    assert_eq!(quotes[0], "Quote N");
    assert!(quotes[1]["error"].as_str().unwrap().contains("mock failure"));
    assert_eq!(quotes[2], "Quote N");

    let (_, stored) = get_quotes(&app).await;
    assert_eq!(stored["quotes"], j["quotes"]);
}

#[tokio::test]
async fn batches_accumulate_in_store() {
    let app = test_app();
    for number in [2, 1, 3] {
        let body = json!({ "event_name": "n", "event_description": "d", "category": "c", "number": number });
        let (status, _) = post_generate(&app, body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, j) = get_quotes(&app).await;
    assert_eq!(j["quotes"].as_array().unwrap().len(), 6);
    assert_eq!(app.store.len().await.unwrap(), 6);

    let (_, again) = get_quotes(&app).await;
    assert_eq!(j, again);
}

#[tokio::test]
async fn health() {
    let app = test_app();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let res = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"ok");
}
