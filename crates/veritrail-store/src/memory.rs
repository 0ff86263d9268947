//! In-memory audit store.
//!
//! Reference implementation of [`AuditStore`]: a `tokio::sync::RwLock` over a
//! map keyed by id. Validation, fingerprinting, and flagging run before the
//! write lock is taken; the lock covers only the map insert, so readers either
//! see a fully-sealed record or none at all. Reads clone `Arc` handles under
//! the read lock and scan the snapshot without holding it.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::metrics::{aggregate, MetricsSnapshot, MetricsWindowing};
use crate::model::{AuditRecord, InsertReceipt, NewAuditEvent};
use crate::query::{run_query, AuditFilter, PageParams, QueryPage};
use crate::store::AuditStore;

#[derive(Default)]
struct Inner {
    records: HashMap<Uuid, Arc<AuditRecord>>,
    last_indexed_at: Option<DateTime<Utc>>,
}

/// Thread-safe in-memory [`AuditStore`].
#[derive(Clone, Default)]
pub struct MemoryAuditStore {
    inner: Arc<RwLock<Inner>>,
    windowing: MetricsWindowing,
}

impl MemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_windowing(windowing: MetricsWindowing) -> Self {
        Self {
            inner: Arc::default(),
            windowing,
        }
    }

    /// Snapshot every record as cheap `Arc` clones.
    async fn snapshot(&self) -> Vec<Arc<AuditRecord>> {
        let inner = self.inner.read().await;
        inner.records.values().cloned().collect()
    }
}

#[async_trait::async_trait]
impl AuditStore for MemoryAuditStore {
    async fn insert(&self, event: NewAuditEvent) -> Result<InsertReceipt> {
        event.validate()?;

        let id = Uuid::new_v4();
        let mut inner = self.inner.write().await;

        // Keep indexed_at strictly monotone with insertion order so the
        // query-sort tiebreak is deterministic even when the clock ties.
        let now = Utc::now();
        let indexed_at = match inner.last_indexed_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        inner.last_indexed_at = Some(indexed_at);

        let record = Arc::new(event.seal(id, indexed_at));
        let receipt = InsertReceipt {
            id,
            content_hash: record.content_hash.clone(),
            indexed_at,
        };
        inner.records.insert(id, record);
        drop(inner);

        tracing::debug!(id = %receipt.id, indexed_at = %receipt.indexed_at, "audit record accepted");
        Ok(receipt)
    }

    async fn get(&self, id: Uuid) -> Result<AuditRecord> {
        let inner = self.inner.read().await;
        inner
            .records
            .get(&id)
            .map(|record| record.as_ref().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn query(&self, filter: &AuditFilter, page: PageParams) -> Result<QueryPage> {
        let snapshot = self.snapshot().await;
        Ok(run_query(snapshot, filter, page))
    }

    async fn metrics(&self) -> Result<MetricsSnapshot> {
        let snapshot = self.snapshot().await;
        Ok(aggregate(&snapshot, self.windowing, Utc::now()))
    }
}
