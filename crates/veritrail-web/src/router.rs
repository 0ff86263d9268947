//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    audit::{create_audit_log, get_audit_log, query_audit_logs},
    metrics::get_metrics,
    system::health_check,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/health", get(health_check))

        // Audit API
        .route("/api/v1/audit/log", post(create_audit_log))
        .route("/api/v1/audit/logs", get(query_audit_logs))
        .route("/api/v1/audit/logs/{id}", get(get_audit_log))

        // Dashboard metrics
        .route("/api/v1/metrics", get(get_metrics))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
