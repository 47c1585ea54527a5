use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness check.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Backend is running" }))
}
