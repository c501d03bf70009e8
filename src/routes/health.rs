use axum::response::Json;
use serde_json::json;

/// Health check endpoint handler.
///
/// Returns a simple JSON response indicating the server is operational.
/// Used by load balancers and uptime monitors.
pub async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "status": "pong" }))
}

/// Root greeting, mirrors what a browser hitting the bare API sees.
pub async fn welcome() -> &'static str {
    "Welcome to the Car Doctor server"
}
