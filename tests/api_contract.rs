//! HTTP API Contract Tests
//!
//! Drives the full router in-process:
//! - Derived fields are computed on create and update
//! - Missing ids answer 404 with a `detail` message
//! - Malformed bodies, ids and overflowing totals answer 422
//! - Unknown paths answer a JSON 404
//! - Delete answers with a confirmation message

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use envtrack::http_server::{build_router, ServerConfig};
use envtrack::records::EnvironmentStore;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Helper Functions
// =============================================================================

fn app() -> Router {
    build_router(&ServerConfig::default(), EnvironmentStore::new())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn carbon(id: i64, kwh: f64, miles: f64, other: f64) -> Value {
    json!({
        "id": id,
        "timestamp": "2024-05-01T12:00:00Z",
        "energy_usage_kwh": kwh,
        "miles_driven": miles,
        "other_sources": other,
        "total_emission": 0.0
    })
}

fn water(id: i64) -> Value {
    json!({
        "id": id,
        "timestamp": "2024-05-01T12:00:00Z",
        "daily_shower_minutes": 1,
        "daily_dish_washing_minutes": 1,
        "daily_other_usage_minutes": 1
    })
}

fn assert_close(actual: &Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// Root Tests
// =============================================================================

#[tokio::test]
async fn test_welcome_message() {
    let (status, body) = send(&app(), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Welcome to the Environmental API for Tracking Pollution, Water Wastage, and Deforestation"
    );
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// =============================================================================
// Derived Field Scenarios
// =============================================================================

#[tokio::test]
async fn test_create_carbon_emission() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/carbon_emissions",
        Some(carbon(1, 500.0, 1000.0, 1.0)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&body["total_emission"], 1.5205);
}

/// A caller-supplied total is discarded.
#[tokio::test]
async fn test_create_ignores_supplied_total() {
    let app = app();
    let mut record = carbon(1, 0.0, 0.0, 2.5);
    record["total_emission"] = json!(1000.0);

    let (_, body) = send(&app, Method::POST, "/carbon_emissions", Some(record)).await;
    assert_close(&body["total_emission"], 2.5);
}

#[tokio::test]
async fn test_create_water_wastage() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/water_wastage",
        Some(json!({
            "id": 1,
            "timestamp": "2024-05-01T07:30:00+01:00",
            "daily_shower_minutes": 10,
            "daily_dish_washing_minutes": 5,
            "daily_other_usage_minutes": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&body["total_wastage"], 144.0);
    assert_eq!(body["timestamp"], "2024-05-01T07:30:00+01:00");
}

#[tokio::test]
async fn test_create_deforestation_impact() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/deforestation_impact",
        Some(json!({
            "id": 1,
            "timestamp": "2024-05-01T12:00:00Z",
            "product_weight": 100
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&body["estimated_trees_cut"], 2.0);
    assert_close(&body["estimated_animals_displaced"], 1.0);
}

/// Update recomputes derived fields from the new raw inputs.
#[tokio::test]
async fn test_update_recomputes_total() {
    let app = app();
    send(&app, Method::POST, "/carbon_emissions", Some(carbon(1, 0.0, 0.0, 1.0))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/carbon_emissions/1",
        Some(carbon(1, 1000.0, 0.0, 0.0)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_close(&body["total_emission"], 0.233);

    let (_, fetched) = send(&app, Method::GET, "/carbon_emissions/1", None).await;
    assert_eq!(fetched, body);
}

// =============================================================================
// CRUD Semantics
// =============================================================================

#[tokio::test]
async fn test_get_missing_on_empty_collection() {
    let (status, body) = send(&app(), Method::GET, "/carbon_emissions/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Emission not found");
}

#[tokio::test]
async fn test_not_found_labels_per_collection() {
    let app = app();
    let (_, body) = send(&app, Method::PUT, "/water_wastage/5", Some(water(5))).await;
    assert_eq!(body["detail"], "Water wastage not found");

    let (status, forest) = send(&app, Method::DELETE, "/deforestation_impact/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(forest["detail"], "Deforestation impact not found");
}

#[tokio::test]
async fn test_insert_then_get_then_delete() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/carbon_emissions", Some(carbon(7, 1.0, 2.0, 3.0))).await;

    let (status, fetched) = send(&app, Method::GET, "/carbon_emissions/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = send(&app, Method::DELETE, "/carbon_emissions/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Emission deleted"}));

    let (status, _) = send(&app, Method::GET, "/carbon_emissions/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_messages() {
    let app = app();
    let impact = json!({
        "id": 1,
        "timestamp": "2024-05-01T12:00:00Z",
        "product_weight": 1
    });
    send(&app, Method::POST, "/water_wastage", Some(water(1))).await;
    send(&app, Method::POST, "/deforestation_impact", Some(impact)).await;

    let (_, body) = send(&app, Method::DELETE, "/water_wastage/1", None).await;
    assert_eq!(body["message"], "Water wastage deleted");

    let (_, forest) = send(&app, Method::DELETE, "/deforestation_impact/1", None).await;
    assert_eq!(forest["message"], "Deforestation impact deleted");
}

/// Replace keeps list position and length.
#[tokio::test]
async fn test_replace_preserves_position() {
    let app = app();
    for id in 1..=3 {
        send(&app, Method::POST, "/carbon_emissions", Some(carbon(id, 0.0, 0.0, 0.0))).await;
    }

    send(&app, Method::PUT, "/carbon_emissions/2", Some(carbon(2, 0.0, 0.0, 9.0))).await;

    let (_, list) = send(&app, Method::GET, "/carbon_emissions", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[1]["id"], 2);
    assert_close(&list[1]["total_emission"], 9.0);
}

/// The replacement may carry a different id than the path.
#[tokio::test]
async fn test_replace_allows_id_drift() {
    let app = app();
    send(&app, Method::POST, "/carbon_emissions", Some(carbon(1, 0.0, 0.0, 0.0))).await;

    let (status, _) = send(&app, Method::PUT, "/carbon_emissions/1", Some(carbon(42, 0.0, 0.0, 0.0))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/carbon_emissions/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::GET, "/carbon_emissions/42", None).await;
    assert_eq!(status, StatusCode::OK);
}

/// Collections do not share ids.
#[tokio::test]
async fn test_collections_are_independent() {
    let app = app();
    send(&app, Method::POST, "/carbon_emissions", Some(carbon(1, 0.0, 0.0, 0.0))).await;

    let (status, _) = send(&app, Method::GET, "/water_wastage/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, Method::GET, "/deforestation_impact", None).await;
    assert_eq!(list, json!([]));
}

// =============================================================================
// Schema Validation
// =============================================================================

#[tokio::test]
async fn test_missing_field_is_422() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/deforestation_impact",
        Some(json!({"id": 1, "timestamp": "2024-05-01T12:00:00Z"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_wrong_type_is_422() {
    let mut record = carbon(1, 0.0, 0.0, 0.0);
    record["miles_driven"] = json!("far");

    let (status, _) = send(&app(), Method::POST, "/carbon_emissions", Some(record)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Timestamps without a UTC offset are accepted and echoed as sent.
#[tokio::test]
async fn test_timestamp_without_offset_is_accepted() {
    let app = app();
    let mut record = water(1);
    record["timestamp"] = json!("2024-05-01T12:00:00");

    let (status, body) = send(&app, Method::POST, "/water_wastage", Some(record)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timestamp"], "2024-05-01T12:00:00");

    let (_, fetched) = send(&app, Method::GET, "/water_wastage/1", None).await;
    assert_eq!(fetched["timestamp"], "2024-05-01T12:00:00");
}

#[tokio::test]
async fn test_invalid_timestamp_is_422() {
    let mut record = carbon(1, 0.0, 0.0, 0.0);
    record["timestamp"] = json!("yesterday");

    let (status, _) = send(&app(), Method::POST, "/carbon_emissions", Some(record)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_integer_id_is_422() {
    let (status, body) = send(&app(), Method::GET, "/carbon_emissions/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

/// Malformed bodies never reach the store.
#[tokio::test]
async fn test_rejected_body_is_not_stored() {
    let app = app();
    send(&app, Method::POST, "/carbon_emissions", Some(json!({"id": 1}))).await;

    let (_, list) = send(&app, Method::GET, "/carbon_emissions", None).await;
    assert_eq!(list, json!([]));
}

/// A total that overflows to infinity is refused instead of stored as null.
#[tokio::test]
async fn test_overflowing_total_is_422() {
    let app = app();
    let mut record = water(1);
    record["daily_shower_minutes"] = json!(1e308);

    let (status, body) = send(&app, Method::POST, "/water_wastage", Some(record.clone())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Water wastage total_wastage is not a finite number");

    send(&app, Method::POST, "/water_wastage", Some(water(1))).await;
    let (status, _) = send(&app, Method::PUT, "/water_wastage/1", Some(record)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, stored) = send(&app, Method::GET, "/water_wastage/1", None).await;
    assert_close(&stored["total_wastage"], 23.0);
}

// =============================================================================
// Unmatched Paths
// =============================================================================

#[tokio::test]
async fn test_trailing_slash_is_json_404() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/carbon_emissions/",
        Some(carbon(1, 0.0, 0.0, 0.0)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let (status, body) = send(&app(), Method::GET, "/plastic_waste", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));
}
