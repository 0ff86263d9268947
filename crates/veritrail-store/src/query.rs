//! Query engine: conjunctive filtering, deterministic sort, pagination.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{AuditRecord, AuditSummary};
use veritrail_common::RiskLevel;

/// Hard cap on page size; larger requests are clamped, not rejected.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Default page size when the caller supplies none.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Optional, conjunctive record filters. A record must satisfy every supplied
/// predicate; an empty filter matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditFilter {
    /// Inclusive lower bound on `timestamp`.
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `timestamp`.
    pub end_date: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
    pub decision_type: Option<String>,
    pub decision_outcome: Option<String>,
    pub model_provider: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub flagged: Option<bool>,
}

impl AuditFilter {
    pub fn matches(&self, record: &AuditRecord) -> bool {
        if let Some(start) = self.start_date {
            if record.timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if record.timestamp > end {
                return false;
            }
        }
        if let Some(user_id) = &self.user_id {
            if &record.user_id != user_id {
                return false;
            }
        }
        if let Some(decision_type) = &self.decision_type {
            if record.decision_type.as_ref() != Some(decision_type) {
                return false;
            }
        }
        if let Some(outcome) = &self.decision_outcome {
            if record.decision_outcome.as_ref() != Some(outcome) {
                return false;
            }
        }
        if let Some(provider) = &self.model_provider {
            if &record.model_provider != provider {
                return false;
            }
        }
        if let Some(risk) = self.risk_level {
            if record.risk_level != risk {
                return false;
            }
        }
        if let Some(flagged) = self.flagged {
            if record.flagged != flagged {
                return false;
            }
        }
        true
    }
}

/// Pagination window. Construct through [`PageParams::new`] so the limit cap
/// is always applied.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    limit: u32,
    offset: u32,
}

impl PageParams {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of query results. `total` counts every match, before pagination.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPage {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub records: Vec<AuditSummary>,
}

/// Run a filtered, sorted, paginated query over a snapshot of the collection.
///
/// Sort order is `timestamp` descending with ties broken by `indexed_at`
/// descending, so an unchanged store always returns an identical page.
pub fn run_query(
    snapshot: Vec<Arc<AuditRecord>>,
    filter: &AuditFilter,
    page: PageParams,
) -> QueryPage {
    let mut matched: Vec<Arc<AuditRecord>> = snapshot
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect();

    matched.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then(b.indexed_at.cmp(&a.indexed_at))
    });

    let total = matched.len() as u64;
    let records = matched
        .iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .map(|record| record.summary())
        .collect();

    QueryPage {
        total,
        limit: page.limit(),
        offset: page.offset(),
        records,
    }
}
