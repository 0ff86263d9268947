//! Audit store trait — the only surface through which records are written or
//! read.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::metrics::MetricsSnapshot;
use crate::model::{AuditRecord, InsertReceipt, NewAuditEvent};
use crate::query::{AuditFilter, PageParams, QueryPage};

/// Append-only audit record store.
///
/// Implementations own the record collection exclusively; callers never see
/// the underlying container. There are no update or delete operations: the log
/// is append-only by design.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Validate, fingerprint, flag, and append one record.
    ///
    /// Atomic under concurrency: two concurrent inserts never share an `id`
    /// and a partially-constructed record is never visible to readers.
    async fn insert(&self, event: NewAuditEvent) -> Result<InsertReceipt>;

    /// Fetch one full record by id. `StoreError::NotFound` when absent.
    async fn get(&self, id: Uuid) -> Result<AuditRecord>;

    /// Filtered, sorted, paginated list query over a consistent snapshot.
    /// Never mutates store state; identical calls on an unchanged store
    /// return identical pages.
    async fn query(&self, filter: &AuditFilter, page: PageParams) -> Result<QueryPage>;

    /// Aggregate metrics over the entire collection.
    async fn metrics(&self) -> Result<MetricsSnapshot>;
}
