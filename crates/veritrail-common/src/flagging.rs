//! Review-flag policy for audit records.
//!
//! A record is routed into the flagged (human-review) subset when the model
//! reported low confidence or the caller declared elevated risk. The rule is a
//! pure function of the incoming event and is evaluated exactly once, at
//! insertion.

use serde::{Deserialize, Serialize};

/// Confidence scores below this value flag the record for review.
pub const CONFIDENCE_REVIEW_THRESHOLD: f64 = 0.7;

/// Caller-declared severity of the audited decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// High and critical risk always route the record to review.
    pub fn elevated(self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Decide whether a record requires compliance review.
///
/// `flagged = (confidence present AND confidence < 0.7) OR risk elevated`.
/// An absent confidence score never flags on its own: not every audited call
/// carries a decision.
pub fn requires_review(confidence_score: Option<f64>, risk_level: RiskLevel) -> bool {
    let low_confidence =
        confidence_score.is_some_and(|score| score < CONFIDENCE_REVIEW_THRESHOLD);
    low_confidence || risk_level.elevated()
}
