//! veritrail-client — SDK for reporting audited LLM calls to a Veritrail
//! server.
//!
//! Wrap an observed LLM exchange in a [`RecordedCall`], finish it into a
//! [`NewAuditEvent`], and ship it with [`AuditClient::log`]. The client owns
//! retries; the server stores at most one record per successful POST.

pub mod client;
pub mod config;
pub mod event;

pub use client::{AuditClient, ClientError, LogReceipt};
pub use config::ClientConfig;
pub use event::RecordedCall;
