//! HTTP handlers for all API routes.

pub mod audit;
pub mod metrics;
pub mod system;
