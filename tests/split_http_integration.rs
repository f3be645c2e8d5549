//! Integration tests for the HTTP surface.
//!
//! These tests drive the full application router, middleware included:
//! 1. Calculation requests return the allocation or a 400 error body
//! 2. Health and fallback routes answer with the expected JSON
//! 3. Response headers carry request ids, CORS and hardening headers

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use taxi_split::adapters::http::{app_router, CalculateResponse, SplitAppState};
use taxi_split::config::ServerConfig;
use taxi_split::domain::split::{CurrencyFormat, SymbolPosition};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    app_with(ServerConfig::default())
}

fn app_with(server: ServerConfig) -> Router {
    app_router(SplitAppState::default(), &server)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn taxi_request() -> Value {
    json!({
        "total": 1000,
        "mode": "distance",
        "participants": [
            { "name": "Alice", "value": 5 },
            { "name": "Bob", "value": 8 }
        ]
    })
}

// =============================================================================
// Calculation
// =============================================================================

#[tokio::test]
async fn distance_split_returns_rounded_pays() {
    let (status, body) = send_json(app(), post_json("/calculate", taxi_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1000);
    assert_eq!(body["mode"], "distance");
    assert_eq!(body["sumPay"], 1000);
    assert_eq!(body["results"][0]["name"], "Alice");
    assert_eq!(body["results"][0]["pay"], 385);
    assert_eq!(body["results"][0]["value"], 5.0);
    assert_eq!(body["results"][1]["name"], "Bob");
    assert_eq!(body["results"][1]["pay"], 615);

    let share = body["results"][0]["share"].as_f64().unwrap();
    assert!((share - 0.3846).abs() < 1e-4);
}

#[tokio::test]
async fn equal_split_puts_remainder_on_last_participant() {
    let request = json!({
        "total": 100,
        "mode": "equal",
        "participants": [
            { "name": "A", "value": 7 },
            { "name": "B", "value": "" },
            { "name": "C" }
        ]
    });

    let (status, _, body) = send(app(), post_json("/calculate", request)).await;
    let response: CalculateResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    let pays: Vec<i64> = response.results.iter().map(|r| r.pay).collect();
    assert_eq!(pays, vec![33, 33, 34]);
    assert_eq!(response.sum_pay, 100);
    assert!(response.results.iter().all(|r| r.value == 1.0));
    assert!(response
        .results
        .iter()
        .all(|r| (r.share - 1.0 / 3.0).abs() < 1e-12));
}

#[tokio::test]
async fn api_prefix_serves_the_same_endpoint() {
    let (status, body) = send_json(app(), post_json("/api/calculate", taxi_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sumPay"], 1000);
}

#[tokio::test]
async fn identical_requests_yield_identical_bytes() {
    let request = json!({
        "total": 1234.56,
        "mode": "individual_price",
        "participants": [
            { "name": "A", "value": 3.3 },
            { "name": "B", "value": "1.7" },
            { "name": "", "value": 9 }
        ]
    });

    let (_, _, first) = send(app(), post_json("/calculate", request.clone())).await;
    let (_, _, second) = send(app(), post_json("/calculate", request)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn summary_format_returns_plain_text() {
    let currency = CurrencyFormat {
        symbol: "$".to_string(),
        group_separator: ",".to_string(),
        position: SymbolPosition::Prefix,
    };
    let app = app_router(SplitAppState::new(currency), &ServerConfig::default());

    let (status, headers, body) =
        send(app, post_json("/calculate?format=summary", taxi_request())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "Total: $1,000\n\
         Mode: By distance\n\
         Alice: share 38.46%, pays $385\n\
         Bob: share 61.54%, pays $615\n\
         Sum: $1,000"
    );
}

// =============================================================================
// Validation errors
// =============================================================================

#[tokio::test]
async fn non_positive_total_is_rejected() {
    let mut request = taxi_request();
    request["total"] = json!(0);

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Total must be a positive number" }));
}

#[tokio::test]
async fn string_total_is_rejected_as_invalid_total() {
    let mut request = taxi_request();
    request["total"] = json!("1000");

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Total must be a positive number");
}

#[tokio::test]
async fn total_is_checked_before_participants_shape() {
    let request = json!({ "total": 0, "mode": "equal", "participants": null });

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Total must be a positive number" }));

    let request = json!({
        "total": -1,
        "mode": "distance",
        "participants": [{ "name": 5, "value": true }, { "name": "b", "value": 1 }]
    });

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Total must be a positive number");
}

#[tokio::test]
async fn non_array_participants_fail_the_count_check() {
    let request = json!({ "total": 100, "mode": "equal", "participants": "Alice, Bob" });

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Participants must be a list with 2 to 10 items, got 0"
    );
}

#[tokio::test]
async fn equal_split_tolerates_mistyped_names_and_values() {
    let request = json!({
        "total": 100,
        "mode": "equal",
        "participants": [{ "name": 5, "value": true }, { "name": "b" }]
    });

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["name"], "Participant 1");
    assert_eq!(body["results"][1]["name"], "b");
    assert_eq!(body["sumPay"], 100);
}

#[tokio::test]
async fn boolean_value_in_proportional_mode_is_invalid() {
    let mut request = taxi_request();
    request["participants"][0]["value"] = json!(true);

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Participant 'Alice' must have a positive numeric value");
}

#[tokio::test]
async fn large_totals_are_split() {
    let request = json!({
        "total": 1e16,
        "mode": "equal",
        "participants": [{ "name": "A" }, { "name": "B" }]
    });

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["pay"], 5_000_000_000_000_000i64);
    assert_eq!(body["results"][1]["pay"], 5_000_000_000_000_000i64);
    assert_eq!(body["sumPay"], 10_000_000_000_000_000i64);
}

#[tokio::test]
async fn participant_counts_outside_bounds_are_rejected() {
    for count in [0usize, 1, 11] {
        let participants: Vec<Value> = (0..count)
            .map(|i| json!({ "name": format!("P{}", i), "value": 1 }))
            .collect();
        let request = json!({ "total": 100, "mode": "equal", "participants": participants });

        let (status, body) = send_json(app(), post_json("/calculate", request)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Participants must be a list with 2 to 10 items"));
    }
}

#[tokio::test]
async fn unknown_mode_is_rejected() {
    let mut request = taxi_request();
    request["mode"] = json!("by_weight");

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Mode must be"));
}

#[tokio::test]
async fn invalid_participant_value_names_the_participant() {
    let mut request = taxi_request();
    request["participants"][1]["value"] = json!("far");

    let (status, body) = send_json(app(), post_json("/calculate", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Participant 'Bob' must have a positive numeric value");
}

#[tokio::test]
async fn malformed_body_is_a_400_with_error_field() {
    let request = Request::builder()
        .method("POST")
        .uri("/calculate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send_json(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn unknown_format_is_a_400() {
    let (status, body) = send_json(app(), post_json("/calculate?format=pdf", taxi_request())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query"));
}

// =============================================================================
// Health and fallback
// =============================================================================

#[tokio::test]
async fn health_reports_ok_at_root_and_api_prefix() {
    for uri in ["/health", "/api/health"] {
        let (status, body) = send_json(app(), get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}

#[tokio::test]
async fn unmatched_routes_return_json_404() {
    for uri in ["/nope", "/api/nope", "/calculate"] {
        let (status, body) = send_json(app(), get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {}", uri);
        assert_eq!(body, json!({ "error": "Not found" }));
    }
}

#[tokio::test]
async fn static_dir_serves_bundle_for_unmatched_paths() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>split</html>").unwrap();
    let server = ServerConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    let (status, _, body) = send(app_with(server.clone()), get("/some/page")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>split</html>");

    let (status, body) = send_json(app_with(server), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn responses_carry_hardening_headers_and_request_id() {
    let (_, headers, _) = send(app(), get("/health")).await;

    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
    assert_eq!(headers["referrer-policy"], "no-referrer");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn default_cors_allows_any_origin() {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://elsewhere.example")
        .body(Body::empty())
        .unwrap();

    let (_, headers, _) = send(app(), request).await;

    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn configured_cors_only_allows_listed_origins() {
    let server = ServerConfig {
        cors_origins: Some("http://localhost:5173".to_string()),
        ..Default::default()
    };

    let allowed = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(app_with(server.clone()), allowed).await;
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );

    let denied = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(app_with(server), denied).await;
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
