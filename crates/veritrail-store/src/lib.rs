//! veritrail-store — Append-only audit record store and query/metrics engine.
//!
//! The store owns every [`AuditRecord`]: it validates an incoming
//! [`NewAuditEvent`], computes the content fingerprint and the review flag,
//! assigns identity, and appends exactly one immutable record. Records are
//! never updated or deleted. Reads go through the query engine (conjunctive
//! filters, timestamp-descending sort, clamped pagination) and the metrics
//! engine (full-corpus aggregation).
//!
//! # Example
//!
//! ```rust,no_run
//! use veritrail_store::{AuditStore, MemoryAuditStore, NewAuditEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryAuditStore::new();
//!     let event: NewAuditEvent = serde_json::from_str(r#"{ "request_id": "…" }"#)?;
//!     let receipt = store.insert(event).await?;
//!     let record = store.get(receipt.id).await?;
//!     assert_eq!(record.content_hash, receipt.content_hash);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod metrics;
pub mod model;
pub mod query;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::MemoryAuditStore;
pub use metrics::{MetricsSnapshot, MetricsWindowing};
pub use model::{AuditRecord, AuditSummary, InsertReceipt, JsonMap, NewAuditEvent};
pub use query::{AuditFilter, PageParams, QueryPage, MAX_PAGE_LIMIT};
pub use store::AuditStore;
