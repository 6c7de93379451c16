//! Integration tests for the Wells-Riley Server API endpoints.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use wellsriley_server::routes::create_router;
use wellsriley_server::{Server, ServerConfig};

/// Helper to make a GET request and get JSON response.
async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

/// Helper to make a POST request and get JSON response.
async fn post_json(app: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, json)
}

/// Helper to POST a raw body and get the status, content type and JSON response.
async fn post_raw(app: axum::Router, uri: &str, body: &str) -> (StatusCode, String, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!({}));

    (status, content_type, json)
}

// =============================================================================
// HEALTH CHECK TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    for uri in ["/health", "/api/v1/health"] {
        let (status, json) = get_json(create_router(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert!(json["version"].is_string());
    }
}

// =============================================================================
// RISK TESTS
// =============================================================================

#[tokio::test]
async fn test_risk_standard_classroom() {
    let body = json!({
        "length": 5.0,
        "width": 4.0,
        "height": 3.0,
        "ventilation_level": "medium",
        "season": "winter",
        "humidity_level": "medium",
        "exposure_hours": 2.0,
        "total_persons": 5
    });

    let (status, json) = post_json(create_router(), "/api/v1/risk", body).await;
    assert_eq!(status, StatusCode::OK);

    let probability = json["result"]["individual_probability_percent"].as_f64().unwrap();
    assert!((probability - 19.48).abs() < 0.01);
    assert_eq!(json["result"]["secondary_cases"], 1);
    assert_eq!(json["result"]["breakdown"]["air_changes_per_hour"], 3.0);
    assert_eq!(json["result"]["breakdown"]["decay_rate"], 0.6);
    assert_eq!(json["result"]["breakdown"]["quanta_emission_rate"], 45.0);
    assert_eq!(json["band"], "medium");
}

#[tokio::test]
async fn test_risk_defaults_with_form_labels() {
    let body = json!({ "ventilation_level": "Nulo (Aire estancado)", "season": "Invierno" });

    let (status, json) = post_json(create_router(), "/api/v1/risk", body).await;
    assert_eq!(status, StatusCode::OK);

    let probability = json["result"]["individual_probability_percent"].as_f64().unwrap();
    assert!((probability - 67.185).abs() < 0.01);
    assert_eq!(json["result"]["secondary_cases"], 3);
    assert_eq!(json["band"], "high");
}

#[tokio::test]
async fn test_risk_rejects_single_person() {
    let (status, json) =
        post_json(create_router(), "/api/v1/risk", json!({ "total_persons": 1 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "total_persons");
    assert!(json["error"].as_str().unwrap().contains("total_persons"));
}

#[tokio::test]
async fn test_risk_rejects_zero_length() {
    let (status, json) = post_json(create_router(), "/api/v1/risk", json!({ "length": 0.0 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "length");
}

#[tokio::test]
async fn test_risk_rejects_unknown_category() {
    let (status, json) = post_json(
        create_router(),
        "/api/v1/risk",
        json!({ "humidity_level": "tropical" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["field"], "humidity_level");
}

#[tokio::test]
async fn test_risk_fractional_persons_is_json_error() {
    let (status, content_type, json) =
        post_raw(create_router(), "/api/v1/risk", r#"{"total_persons": 2.5}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(content_type.starts_with("application/json"));
    assert_eq!(json["field"], "total_persons");
    assert!(json["error"].as_str().unwrap().contains("total_persons"));
}

#[tokio::test]
async fn test_risk_text_length_is_json_error() {
    let (status, content_type, json) =
        post_raw(create_router(), "/api/v1/risk", r#"{"length": "five"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(content_type.starts_with("application/json"));
    assert_eq!(json["field"], "length");
}

#[tokio::test]
async fn test_risk_malformed_body_is_json_error() {
    let (status, content_type, json) =
        post_raw(create_router(), "/api/v1/risk", r#"{"length": "#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.starts_with("application/json"));
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_risk_two_persons_at_most_one_case() {
    let (status, json) = post_json(
        create_router(),
        "/api/v1/risk",
        json!({ "ventilation_level": "none", "humidity_level": "dry", "exposure_hours": 8.0, "total_persons": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["result"]["secondary_cases"].as_u64().unwrap() <= 1);
}

// =============================================================================
// BATCH TESTS
// =============================================================================

#[tokio::test]
async fn test_batch_mixed_results() {
    let body = json!([
        {},
        { "ventilation_level": "none" },
        { "total_persons": 1 }
    ]);

    let (status, json) = post_json(create_router(), "/api/v1/risk/batch", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["succeeded"], 2);
    assert_eq!(json["failed"], 1);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["response"]["result"]["secondary_cases"], 1);
    assert_eq!(items[1]["response"]["result"]["secondary_cases"], 3);
    assert_eq!(items[2]["index"], 2);
    assert_eq!(items[2]["error"]["field"], "total_persons");
    assert!(items[2].get("response").is_none());
}

#[tokio::test]
async fn test_batch_wrong_type_reports_path() {
    let (status, content_type, json) = post_raw(
        create_router(),
        "/api/v1/risk/batch",
        r#"[{}, {"total_persons": 2.5}]"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(content_type.starts_with("application/json"));
    assert_eq!(json["field"], "[1].total_persons");
}

#[tokio::test]
async fn test_batch_empty() {
    let (status, json) = post_json(create_router(), "/api/v1/risk/batch", json!([])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["succeeded"], 0);
    assert_eq!(json["failed"], 0);
}

// =============================================================================
// CALIBRATION TESTS
// =============================================================================

#[tokio::test]
async fn test_calibration_tables() {
    let (status, json) = get_json(create_router(), "/api/v1/calibration").await;
    assert_eq!(status, StatusCode::OK);

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert!(rows
        .iter()
        .any(|r| r["category"] == "Ventilation (ACH)" && r["key"] == "High" && r["value"] == 8.0));
    assert!(rows
        .iter()
        .any(|r| r["key"] == "Breathing rate (p)" && r["value"] == 0.52));
}

// =============================================================================
// SERVER TESTS
// =============================================================================

#[tokio::test]
async fn test_server_router_serves_requests() {
    let server = Server::new(ServerConfig::default());
    let (status, json) = get_json(server.router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}
