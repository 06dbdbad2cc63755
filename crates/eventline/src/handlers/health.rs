//! Health check endpoint.

use axum::Json;

/// GET /health - Basic liveness probe.
#[axum::debug_handler]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
