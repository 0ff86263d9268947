//! veritrail-web — HTTP transport for the Veritrail audit service.
//! Provides the JSON API:
//!   - audit event ingestion
//!   - filtered/paginated log queries and record detail
//!   - dashboard metrics
//!   - health check

pub mod auth;
pub mod config;
pub mod handlers;
pub mod router;
pub mod seed;
pub mod state;
