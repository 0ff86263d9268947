//! veritrail-common — Shared types, errors, and business rules used across all
//! Veritrail crates.

pub mod error;
pub mod fingerprint;
pub mod flagging;

// Re-export commonly used types
pub use error::ApiError;
pub use fingerprint::{content_fingerprint, sha256_hex};
pub use flagging::{requires_review, RiskLevel};
