//! Health check.

use axum::Json;
use serde_json::{json, Value};

/// GET /health — unauthenticated liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
