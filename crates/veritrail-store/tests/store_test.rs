//! Record store behavior: insert, fingerprint, flag, identity, immutability.

use chrono::{TimeZone, Utc};
use uuid::Uuid;
use veritrail_common::RiskLevel;
use veritrail_store::{
    AuditStore, JsonMap, MemoryAuditStore, NewAuditEvent, StoreError,
};

fn event(request_id: &str) -> NewAuditEvent {
    NewAuditEvent {
        request_id: request_id.to_string(),
        timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
        duration_ms: 1500,
        user_id: "user_test".into(),
        session_id: Some("sess_test".into()),
        organization_id: "org_test".into(),
        prompt_hash: "hash_abc".into(),
        prompt_content: "Analyze loan application".into(),
        prompt_tokens: 120,
        response_content: "APPROVED".into(),
        response_tokens: 40,
        model_provider: "openai".into(),
        model_name: "gpt-4-turbo".into(),
        model_parameters: JsonMap::new(),
        decision_type: Some("loan_underwriting".into()),
        decision_outcome: Some("approved".into()),
        confidence_score: Some(0.92),
        reasoning: None,
        factors: None,
        compliance_tags: vec!["SOC2".into()],
        risk_level: RiskLevel::Low,
        metadata: JsonMap::new(),
    }
}

#[tokio::test]
async fn insert_then_get_round_trips_unchanged() {
    let store = MemoryAuditStore::new();
    let receipt = store.insert(event("req_rt")).await.unwrap();

    let record = store.get(receipt.id).await.unwrap();
    assert_eq!(record.id, receipt.id);
    assert_eq!(record.content_hash, receipt.content_hash);
    assert_eq!(record.indexed_at, receipt.indexed_at);
    assert_eq!(record.request_id, "req_rt");
    assert_eq!(record.prompt_content, "Analyze loan application");
    assert!(!record.flagged);
}

#[tokio::test]
async fn content_hash_identical_for_identical_fingerprint_inputs() {
    let store = MemoryAuditStore::new();

    let first = store.insert(event("req_a")).await.unwrap();
    // Same timestamp/prompt_hash/response/model, everything else varied
    let mut other = event("req_b");
    other.user_id = "someone_else".into();
    other.duration_ms = 1;
    other.confidence_score = Some(0.99);
    let second = store.insert(other).await.unwrap();

    assert_eq!(first.content_hash, second.content_hash);
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn flag_policy_truth_table() {
    let store = MemoryAuditStore::new();
    let cases = [
        (Some(0.69), RiskLevel::Low, true),
        (Some(0.95), RiskLevel::Critical, true),
        (Some(0.95), RiskLevel::Low, false),
        (None, RiskLevel::Medium, false),
    ];
    for (i, (confidence, risk, expected)) in cases.into_iter().enumerate() {
        let mut e = event(&format!("req_flag_{i}"));
        e.confidence_score = confidence;
        e.risk_level = risk;
        let receipt = store.insert(e).await.unwrap();
        let record = store.get(receipt.id).await.unwrap();
        assert_eq!(
            record.flagged, expected,
            "confidence {confidence:?}, risk {risk:?}"
        );
    }
}

#[tokio::test]
async fn concurrent_inserts_yield_distinct_retrievable_ids() {
    let store = MemoryAuditStore::new();
    let n = 64;

    let mut handles = Vec::new();
    for i in 0..n {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.insert(event(&format!("req_conc_{i}"))).await.unwrap()
        }));
    }

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        let receipt = handle.await.unwrap();
        assert!(ids.insert(receipt.id), "duplicate id {}", receipt.id);
    }
    assert_eq!(ids.len(), n);

    for id in ids {
        store.get(id).await.unwrap();
    }
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let store = MemoryAuditStore::new();
    let err = store.get(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn invalid_event_is_rejected_before_any_mutation() {
    let store = MemoryAuditStore::new();

    let mut blank = event("req_bad");
    blank.model_name = "".into();
    assert!(matches!(
        store.insert(blank).await.unwrap_err(),
        StoreError::Validation(_)
    ));

    let mut out_of_range = event("req_bad2");
    out_of_range.confidence_score = Some(2.0);
    assert!(matches!(
        store.insert(out_of_range).await.unwrap_err(),
        StoreError::Validation(_)
    ));

    // Nothing was persisted
    let metrics = store.metrics().await.unwrap();
    assert_eq!(metrics.total_today, 0);
}

#[tokio::test]
async fn stored_record_is_immutable_through_the_api() {
    let store = MemoryAuditStore::new();
    let receipt = store.insert(event("req_imm")).await.unwrap();

    // Mutating a fetched copy must not touch the stored record.
    let mut copy = store.get(receipt.id).await.unwrap();
    copy.content_hash = "tampered".into();
    copy.flagged = true;
    copy.response_content = "rewritten".into();

    let fresh = store.get(receipt.id).await.unwrap();
    assert_eq!(fresh.content_hash, receipt.content_hash);
    assert!(!fresh.flagged);
    assert_eq!(fresh.response_content, "APPROVED");
}

#[tokio::test]
async fn indexed_at_is_monotone_with_insertion_order() {
    let store = MemoryAuditStore::new();
    let mut previous = None;
    for i in 0..10 {
        let receipt = store.insert(event(&format!("req_mono_{i}"))).await.unwrap();
        if let Some(prev) = previous {
            assert!(receipt.indexed_at > prev);
        }
        previous = Some(receipt.indexed_at);
    }
}
