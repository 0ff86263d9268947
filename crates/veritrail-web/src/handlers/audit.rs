//! Audit log ingestion, list queries, and record detail.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use veritrail_common::{ApiError, RiskLevel};
use veritrail_store::{AuditFilter, AuditRecord, AuditSummary, NewAuditEvent, PageParams};

use crate::auth::ApiKey;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub audit_log_id: Uuid,
    pub content_hash: String,
    pub indexed_at: DateTime<Utc>,
}

/// Query-string parameters for the list endpoint: every filter plus the
/// pagination window, all optional. Kept flat because nested query decoding
/// loses typed fields.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    pub decision_type: Option<String>,
    pub decision_outcome: Option<String>,
    pub model_provider: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub flagged: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub logs: Vec<AuditSummary>,
}

/// POST /api/v1/audit/log — record one audit event.
pub async fn create_audit_log(
    State(state): State<SharedState>,
    _key: ApiKey,
    Json(event): Json<NewAuditEvent>,
) -> Result<Json<CreateResponse>, ApiError> {
    let receipt = state.store.insert(event).await?;
    Ok(Json(CreateResponse {
        success: true,
        audit_log_id: receipt.id,
        content_hash: receipt.content_hash,
        indexed_at: receipt.indexed_at,
    }))
}

/// GET /api/v1/audit/logs — filtered, paginated summaries.
pub async fn query_audit_logs(
    State(state): State<SharedState>,
    _key: ApiKey,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let filter = AuditFilter {
        start_date: params.start_date,
        end_date: params.end_date,
        user_id: params.user_id,
        decision_type: params.decision_type,
        decision_outcome: params.decision_outcome,
        model_provider: params.model_provider,
        risk_level: params.risk_level,
        flagged: params.flagged,
    };
    let page = PageParams::new(params.limit, params.offset);

    let result = state.store.query(&filter, page).await?;
    Ok(Json(ListResponse {
        total: result.total,
        limit: result.limit,
        offset: result.offset,
        logs: result.records,
    }))
}

/// GET /api/v1/audit/logs/{id} — full record detail.
pub async fn get_audit_log(
    State(state): State<SharedState>,
    _key: ApiKey,
    Path(id): Path<String>,
) -> Result<Json<AuditRecord>, ApiError> {
    // Any string that is not a stored id is simply an unknown record.
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::NotFound(format!("Audit record not found: {id}")))?;
    let record = state.store.get(id).await?;
    Ok(Json(record))
}
