//! Metrics engine: full-corpus aggregation for the compliance dashboard.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};

use crate::model::AuditRecord;

/// Bucket name for records that carry no decision type or outcome. Absent
/// optional values aggregate here, never as zero/empty.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// How the today/week/month window totals are computed.
///
/// The historical behavior reports the all-time count for all three windows;
/// it stays the default so existing dashboards keep their numbers. Bucketed
/// mode counts by `timestamp` against UTC midnight, 7 days, and 30 days.
/// Rates and group counts are all-time in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsWindowing {
    #[default]
    AllTime,
    Bucketed,
}

/// Point-in-time aggregate view over the entire record collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_today: u64,
    pub total_week: u64,
    pub total_month: u64,
    /// Percentage of records with outcome `approved`; 0 on an empty store.
    pub approval_rate: f64,
    /// Percentage of records with outcome `denied`; 0 on an empty store.
    pub denial_rate: f64,
    /// Percentage of flagged records; 0 on an empty store.
    pub flagged_rate: f64,
    pub avg_duration_ms: f64,
    pub by_outcome: BTreeMap<String, u64>,
    pub by_model: BTreeMap<String, u64>,
    pub by_decision_type: BTreeMap<String, u64>,
}

/// Aggregate a snapshot of the collection in one pass.
pub fn aggregate(
    snapshot: &[Arc<AuditRecord>],
    windowing: MetricsWindowing,
    now: DateTime<Utc>,
) -> MetricsSnapshot {
    let total = snapshot.len() as u64;

    let mut by_outcome: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_model: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_decision_type: BTreeMap<String, u64> = BTreeMap::new();
    let mut flagged_count: u64 = 0;
    let mut total_duration: u64 = 0;

    for record in snapshot {
        let outcome = record
            .decision_outcome
            .as_deref()
            .unwrap_or(UNKNOWN_BUCKET);
        *by_outcome.entry(outcome.to_string()).or_default() += 1;

        *by_model.entry(record.model_name.clone()).or_default() += 1;

        let decision_type = record.decision_type.as_deref().unwrap_or(UNKNOWN_BUCKET);
        *by_decision_type.entry(decision_type.to_string()).or_default() += 1;

        if record.flagged {
            flagged_count += 1;
        }
        total_duration += record.duration_ms;
    }

    let rate = |count: u64| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    };

    let approved = by_outcome.get("approved").copied().unwrap_or(0);
    let denied = by_outcome.get("denied").copied().unwrap_or(0);

    let (total_today, total_week, total_month) = match windowing {
        MetricsWindowing::AllTime => (total, total, total),
        MetricsWindowing::Bucketed => windowed_totals(snapshot, now),
    };

    MetricsSnapshot {
        total_today,
        total_week,
        total_month,
        approval_rate: rate(approved),
        denial_rate: rate(denied),
        flagged_rate: rate(flagged_count),
        avg_duration_ms: if total == 0 {
            0.0
        } else {
            total_duration as f64 / total as f64
        },
        by_outcome,
        by_model,
        by_decision_type,
    }
}

fn windowed_totals(snapshot: &[Arc<AuditRecord>], now: DateTime<Utc>) -> (u64, u64, u64) {
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(now);
    let week_start = now.checked_sub_days(Days::new(7)).unwrap_or(now);
    let month_start = now.checked_sub_days(Days::new(30)).unwrap_or(now);

    let mut today = 0;
    let mut week = 0;
    let mut month = 0;
    for record in snapshot {
        if record.timestamp >= midnight {
            today += 1;
        }
        if record.timestamp >= week_start {
            week += 1;
        }
        if record.timestamp >= month_start {
            month += 1;
        }
    }
    (today, week, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_has_zero_rates() {
        let metrics = aggregate(&[], MetricsWindowing::AllTime, Utc::now());
        assert_eq!(metrics.total_today, 0);
        assert_eq!(metrics.approval_rate, 0.0);
        assert_eq!(metrics.denial_rate, 0.0);
        assert_eq!(metrics.flagged_rate, 0.0);
        assert_eq!(metrics.avg_duration_ms, 0.0);
        assert!(metrics.by_outcome.is_empty());
    }
}
