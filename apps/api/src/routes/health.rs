use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careers-api"
    }))
}

/// GET /api
/// Lists the endpoint groups.
pub async fn api_root() -> Json<Value> {
    Json(json!({
        "companies": "/api/companies/",
        "content": "/api/content/",
        "jobs": "/api/jobs/"
    }))
}
