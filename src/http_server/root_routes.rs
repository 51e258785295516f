//! Root HTTP Routes
//!
//! Welcome message at `/`, a health check at `/health`, and the JSON 404
//! answered for any path no other router matches.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::errors::ApiError;
use super::record_routes::MessageResponse;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Environmental API for Tracking Pollution, Water Wastage, and Deforestation";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create root routes
pub fn root_routes() -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/health", get(health_handler))
}

async fn welcome_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Fallback for unmatched paths
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
