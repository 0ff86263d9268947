//! Demo-data seeding.
//!
//! Inserts a small set of representative events at startup through the public
//! insert contract — there is no special-cased path into the store.

use chrono::Utc;
use serde_json::json;

use veritrail_common::{sha256_hex, RiskLevel};
use veritrail_store::{AuditStore, JsonMap, NewAuditEvent};

fn object(value: serde_json::Value) -> JsonMap {
    value.as_object().cloned().unwrap_or_default()
}

fn demo_events() -> Vec<NewAuditEvent> {
    vec![
        NewAuditEvent {
            request_id: "req_demo_001".into(),
            timestamp: Utc::now(),
            duration_ms: 2345,
            user_id: "user_john".into(),
            session_id: Some("sess_loan_001".into()),
            organization_id: "org_acme_bank".into(),
            prompt_hash: sha256_hex(b"demo1"),
            prompt_content: "Analyze loan application: Credit score 720, DTI 35%".into(),
            prompt_tokens: 150,
            response_content: "APPROVED - Strong credit profile with manageable debt load."
                .into(),
            response_tokens: 80,
            model_provider: "openai".into(),
            model_name: "gpt-4-turbo".into(),
            model_parameters: object(json!({ "temperature": 0.3 })),
            decision_type: Some("loan_underwriting".into()),
            decision_outcome: Some("approved".into()),
            confidence_score: Some(0.92),
            reasoning: Some("Credit score exceeds 700 threshold, DTI below 40%".into()),
            factors: Some(object(json!({
                "credit_score": { "value": 720, "passed": true },
                "dti": { "value": 0.35, "passed": true }
            }))),
            compliance_tags: vec!["SOC2".into(), "FCRA".into()],
            risk_level: RiskLevel::Low,
            metadata: object(json!({ "loan_amount": 25000 })),
        },
        NewAuditEvent {
            request_id: "req_demo_002".into(),
            timestamp: Utc::now(),
            duration_ms: 2847,
            user_id: "user_jane".into(),
            session_id: Some("sess_loan_002".into()),
            organization_id: "org_acme_bank".into(),
            prompt_hash: sha256_hex(b"demo2"),
            prompt_content: "Analyze loan application: Credit score 680, DTI 48%".into(),
            prompt_tokens: 180,
            response_content: "DENIED - DTI ratio exceeds 45% policy threshold.".into(),
            response_tokens: 120,
            model_provider: "openai".into(),
            model_name: "gpt-4-turbo".into(),
            model_parameters: object(json!({ "temperature": 0.3 })),
            decision_type: Some("loan_underwriting".into()),
            decision_outcome: Some("denied".into()),
            confidence_score: Some(0.87),
            reasoning: Some("DTI 48% exceeds maximum 45% threshold".into()),
            factors: Some(object(json!({
                "credit_score": { "value": 680, "passed": true },
                "dti": { "value": 0.48, "passed": false }
            }))),
            compliance_tags: vec!["SOC2".into(), "FCRA".into(), "ECOA".into()],
            risk_level: RiskLevel::High,
            metadata: object(json!({ "loan_amount": 50000 })),
        },
        NewAuditEvent {
            request_id: "req_demo_003".into(),
            timestamp: Utc::now(),
            duration_ms: 3200,
            user_id: "user_doctor".into(),
            session_id: Some("sess_med_001".into()),
            organization_id: "org_healthfirst".into(),
            prompt_hash: sha256_hex(b"demo3"),
            prompt_content: "Patient symptoms: fatigue, weight loss, increased thirst".into(),
            prompt_tokens: 200,
            response_content: "Possible Type 2 Diabetes - recommend glucose testing".into(),
            response_tokens: 150,
            model_provider: "anthropic".into(),
            model_name: "claude-3-opus".into(),
            model_parameters: object(json!({ "temperature": 0.2 })),
            decision_type: Some("diagnosis_assist".into()),
            decision_outcome: Some("flagged".into()),
            confidence_score: Some(0.65),
            reasoning: Some("Low confidence due to pending lab results".into()),
            factors: Some(object(json!({
                "symptoms_match": { "value": 0.72 },
                "labs_pending": true
            }))),
            compliance_tags: vec!["HIPAA".into()],
            risk_level: RiskLevel::Medium,
            metadata: object(json!({ "patient_id": "PT_REDACTED" })),
        },
    ]
}

/// Populate the store with demo events through the normal insert path.
pub async fn seed_demo_data(store: &dyn AuditStore) -> anyhow::Result<()> {
    let events = demo_events();
    let count = events.len();
    for event in events {
        store.insert(event).await?;
    }
    tracing::info!(count, "seeded demo audit records");
    Ok(())
}
