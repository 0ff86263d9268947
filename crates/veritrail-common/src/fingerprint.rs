//! Tamper-evident content fingerprint for audit records.
//!
//! The fingerprint is a hex SHA-256 over the concatenation, in fixed order, of
//! the canonical timestamp, the prompt hash, the response content, and the
//! model name. Algorithm and field order are a compatibility contract: an
//! external verifier re-hashing the same logical inputs must obtain the same
//! digest.

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Canonical string form of a timestamp for fingerprinting: RFC 3339 UTC with
/// microsecond precision and a `Z` suffix.
pub fn canonical_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Hex SHA-256 of arbitrary bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Compute the content fingerprint of one audited exchange.
pub fn content_fingerprint(
    timestamp: &DateTime<Utc>,
    prompt_hash: &str,
    response_content: &str,
    model_name: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_timestamp(timestamp).as_bytes());
    hasher.update(prompt_hash.as_bytes());
    hasher.update(response_content.as_bytes());
    hasher.update(model_name.as_bytes());
    format!("{:x}", hasher.finalize())
}
