//! Builder turning one observed LLM exchange into an audit event.

use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use veritrail_common::{sha256_hex, RiskLevel};
use veritrail_store::{JsonMap, NewAuditEvent};

/// One in-flight audited LLM call.
///
/// Created before (or right after) the call, filled with the exchange, and
/// finished into a [`NewAuditEvent`]. The builder assigns the correlation id,
/// hashes the prompt, and measures latency from construction to `finish`.
pub struct RecordedCall {
    started: Instant,
    user_id: String,
    session_id: Option<String>,
    model_provider: String,
    model_name: String,
    model_parameters: JsonMap,
    prompt_content: String,
    prompt_tokens: u32,
    response_content: String,
    response_tokens: u32,
    decision_type: Option<String>,
    decision_outcome: Option<String>,
    confidence_score: Option<f64>,
    reasoning: Option<String>,
    factors: Option<JsonMap>,
    compliance_tags: Vec<String>,
    risk_level: RiskLevel,
    metadata: JsonMap,
}

impl RecordedCall {
    pub fn new(
        user_id: impl Into<String>,
        model_provider: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            started: Instant::now(),
            user_id: user_id.into(),
            session_id: None,
            model_provider: model_provider.into(),
            model_name: model_name.into(),
            model_parameters: JsonMap::new(),
            prompt_content: String::new(),
            prompt_tokens: 0,
            response_content: String::new(),
            response_tokens: 0,
            decision_type: None,
            decision_outcome: None,
            confidence_score: None,
            reasoning: None,
            factors: None,
            compliance_tags: Vec::new(),
            risk_level: RiskLevel::Low,
            metadata: JsonMap::new(),
        }
    }

    pub fn session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn prompt(mut self, content: impl Into<String>, tokens: u32) -> Self {
        self.prompt_content = content.into();
        self.prompt_tokens = tokens;
        self
    }

    pub fn response(mut self, content: impl Into<String>, tokens: u32) -> Self {
        self.response_content = content.into();
        self.response_tokens = tokens;
        self
    }

    pub fn parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.model_parameters.insert(key.into(), value);
        self
    }

    pub fn decision(
        mut self,
        decision_type: impl Into<String>,
        outcome: impl Into<String>,
        confidence: f64,
    ) -> Self {
        self.decision_type = Some(decision_type.into());
        self.decision_outcome = Some(outcome.into());
        self.confidence_score = Some(confidence);
        self
    }

    pub fn reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    pub fn factors(mut self, factors: JsonMap) -> Self {
        self.factors = Some(factors);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.compliance_tags.push(tag.into());
        self
    }

    pub fn risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = risk_level;
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Close the call: stamp the event with a fresh correlation id, the prompt
    /// hash, and the elapsed latency.
    pub fn finish(self, organization_id: impl Into<String>) -> NewAuditEvent {
        let duration_ms = self.started.elapsed().as_millis() as u64;
        NewAuditEvent {
            request_id: format!("req_{}", Uuid::new_v4()),
            timestamp: Utc::now(),
            duration_ms,
            user_id: self.user_id,
            session_id: self.session_id,
            organization_id: organization_id.into(),
            prompt_hash: sha256_hex(self.prompt_content.as_bytes()),
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
        }
    }
}
