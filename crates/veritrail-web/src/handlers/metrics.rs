//! Compliance dashboard metrics.

use axum::extract::State;
use axum::Json;

use veritrail_common::ApiError;
use veritrail_store::MetricsSnapshot;

use crate::auth::ApiKey;
use crate::state::SharedState;

/// GET /api/v1/metrics — aggregate view over the full record collection.
pub async fn get_metrics(
    State(state): State<SharedState>,
    _key: ApiKey,
) -> Result<Json<MetricsSnapshot>, ApiError> {
    let snapshot = state.store.metrics().await?;
    Ok(Json(snapshot))
}
