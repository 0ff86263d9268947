//! Audit record data model.
//!
//! [`NewAuditEvent`] is the caller-supplied shape; the store turns an accepted
//! event into exactly one [`AuditRecord`], adding identity, the content
//! fingerprint, the review flag, and the acceptance time. Records are
//! immutable once sealed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use veritrail_common::{content_fingerprint, requires_review, RiskLevel};

/// Free-form extension maps (`model_parameters`, `factors`, `metadata`).
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// One incoming audit event, as supplied by the caller.
///
/// Everything in [`AuditRecord`] except the store-assigned fields (`id`,
/// `content_hash`, `flagged`, `indexed_at`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuditEvent {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub duration_ms: u64,

    pub user_id: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub organization_id: String,

    pub prompt_hash: String,
    pub prompt_content: String,
    pub prompt_tokens: u32,

    pub response_content: String,
    pub response_tokens: u32,

    pub model_provider: String,
    pub model_name: String,
    #[serde(default)]
    pub model_parameters: JsonMap,

    #[serde(default)]
    pub decision_type: Option<String>,
    #[serde(default)]
    pub decision_outcome: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub factors: Option<JsonMap>,

    #[serde(default)]
    pub compliance_tags: Vec<String>,
    #[serde(default)]
    pub risk_level: RiskLevel,

    #[serde(default)]
    pub metadata: JsonMap,
}

impl NewAuditEvent {
    /// Semantic validation, run before any store mutation.
    ///
    /// Presence and typing of fields is already enforced at the decode
    /// boundary; this checks what serde cannot: required strings must be
    /// non-empty and a supplied confidence score must lie in [0.0, 1.0].
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("request_id", &self.request_id),
            ("user_id", &self.user_id),
            ("organization_id", &self.organization_id),
            ("prompt_hash", &self.prompt_hash),
            ("prompt_content", &self.prompt_content),
            ("response_content", &self.response_content),
            ("model_provider", &self.model_provider),
            ("model_name", &self.model_name),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(StoreError::Validation(format!(
                    "field '{name}' must not be empty"
                )));
            }
        }

        if let Some(score) = self.confidence_score {
            if !(0.0..=1.0).contains(&score) {
                return Err(StoreError::Validation(format!(
                    "confidence_score must be within [0.0, 1.0], got {score}"
                )));
            }
        }

        Ok(())
    }

    /// Seal a validated event into an immutable record.
    ///
    /// Computes the content fingerprint and the review flag; both are fixed
    /// here and never recomputed.
    pub(crate) fn seal(self, id: Uuid, indexed_at: DateTime<Utc>) -> AuditRecord {
        let content_hash = content_fingerprint(
            &self.timestamp,
            &self.prompt_hash,
            &self.response_content,
            &self.model_name,
        );
        let flagged = requires_review(self.confidence_score, self.risk_level);

        AuditRecord {
            id,
            request_id: self.request_id,
            timestamp: self.timestamp,
            indexed_at,
            duration_ms: self.duration_ms,
            user_id: self.user_id,
            session_id: self.session_id,
            organization_id: self.organization_id,
            prompt_hash: self.prompt_hash,
            prompt_content: self.prompt_content,
            prompt_tokens: self.prompt_tokens,
            response_content: self.response_content,
            response_tokens: self.response_tokens,
            model_provider: self.model_provider,
            model_name: self.model_name,
            model_parameters: self.model_parameters,
            decision_type: self.decision_type,
            decision_outcome: self.decision_outcome,
            confidence_score: self.confidence_score,
            reasoning: self.reasoning,
            factors: self.factors,
            compliance_tags: self.compliance_tags,
            risk_level: self.risk_level,
            metadata: self.metadata,
            content_hash,
            flagged,
        }
    }
}

/// One persisted audit record. Immutable after insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: Uuid,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub indexed_at: DateTime<Utc>,
    pub duration_ms: u64,

    pub user_id: String,
    pub session_id: Option<String>,
    pub organization_id: String,

    pub prompt_hash: String,
    pub prompt_content: String,
    pub prompt_tokens: u32,

    pub response_content: String,
    pub response_tokens: u32,

    pub model_provider: String,
    pub model_name: String,
    pub model_parameters: JsonMap,

    pub decision_type: Option<String>,
    pub decision_outcome: Option<String>,
    pub confidence_score: Option<f64>,
    pub reasoning: Option<String>,
    pub factors: Option<JsonMap>,

    pub compliance_tags: Vec<String>,
    pub risk_level: RiskLevel,

    pub metadata: JsonMap,

    /// Store-computed fingerprint over timestamp, prompt hash, response
    /// content, and model name. Fixed at insertion.
    pub content_hash: String,
    /// Review-flag decision, fixed at insertion.
    pub flagged: bool,
}

impl AuditRecord {
    /// Compact projection for list views; full content is fetched by id.
    pub fn summary(&self) -> AuditSummary {
        AuditSummary {
            id: self.id,
            timestamp: self.timestamp,
            user_id: self.user_id.clone(),
            decision_type: self.decision_type.clone(),
            decision_outcome: self.decision_outcome.clone(),
            model_name: self.model_name.clone(),
            risk_level: self.risk_level,
            flagged: self.flagged,
            duration_ms: self.duration_ms,
        }
    }
}

/// Row shape returned by list queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub decision_type: Option<String>,
    pub decision_outcome: Option<String>,
    pub model_name: String,
    pub risk_level: RiskLevel,
    pub flagged: bool,
    pub duration_ms: u64,
}

/// Result of a successful insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertReceipt {
    pub id: Uuid,
    pub content_hash: String,
    pub indexed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event() -> NewAuditEvent {
        NewAuditEvent {
            request_id: "req_001".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            duration_ms: 1200,
            user_id: "user_a".into(),
            session_id: None,
            organization_id: "org_a".into(),
            prompt_hash: "ph".into(),
            prompt_content: "prompt".into(),
            prompt_tokens: 10,
            response_content: "response".into(),
            response_tokens: 5,
            model_provider: "openai".into(),
            model_name: "gpt-4-turbo".into(),
            model_parameters: JsonMap::new(),
            decision_type: None,
            decision_outcome: None,
            confidence_score: None,
            reasoning: None,
            factors: None,
            compliance_tags: vec![],
            risk_level: RiskLevel::Low,
            metadata: JsonMap::new(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_event() {
        assert!(event().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_required_field() {
        let mut e = event();
        e.user_id = "   ".into();
        let err = e.validate().unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(err.to_string().contains("user_id"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_confidence() {
        let mut e = event();
        e.confidence_score = Some(1.5);
        assert!(matches!(e.validate(), Err(StoreError::Validation(_))));
        e.confidence_score = Some(-0.1);
        assert!(matches!(e.validate(), Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_decode_fills_optional_defaults() {
        let json = serde_json::json!({
            "request_id": "req_min",
            "timestamp": "2025-06-01T09:00:00Z",
            "duration_ms": 10,
            "user_id": "u",
            "organization_id": "o",
            "prompt_hash": "h",
            "prompt_content": "p",
            "prompt_tokens": 1,
            "response_content": "r",
            "response_tokens": 1,
            "model_provider": "openai",
            "model_name": "gpt-4-turbo"
        });
        let e: NewAuditEvent = serde_json::from_value(json).unwrap();
        assert_eq!(e.risk_level, RiskLevel::Low);
        assert!(e.compliance_tags.is_empty());
        assert!(e.metadata.is_empty());
        assert!(e.decision_outcome.is_none());
    }

    #[test]
    fn test_decode_rejects_unknown_risk_level() {
        let mut json = serde_json::to_value(event()).unwrap();
        json["risk_level"] = "catastrophic".into();
        assert!(serde_json::from_value::<NewAuditEvent>(json).is_err());
    }

    #[test]
    fn test_seal_is_deterministic_over_fingerprint_inputs() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let a = event().seal(id, now);

        // Vary every field outside the fingerprint
        let mut other = event();
        other.request_id = "req_002".into();
        other.user_id = "user_b".into();
        other.prompt_content = "different prompt".into();
        other.duration_ms = 9999;
        let b = other.seal(Uuid::new_v4(), now);

        assert_eq!(a.content_hash, b.content_hash);
    }

    #[test]
    fn test_summary_projects_list_fields() {
        let record = event().seal(Uuid::new_v4(), Utc::now());
        let summary = record.summary();
        assert_eq!(summary.id, record.id);
        assert_eq!(summary.model_name, "gpt-4-turbo");
        assert_eq!(summary.duration_ms, 1200);
        assert!(!summary.flagged);
    }
}
