//! Client configuration, with env-var fallbacks matching the server defaults.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub organization_id: String,
    pub base_url: String,
    pub timeout: Duration,
    pub retry_count: u32,
}

impl ClientConfig {
    pub fn new(
        api_key: impl Into<String>,
        organization_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            organization_id: organization_id.into(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
            retry_count: 3,
        }
    }

    /// Read `VERITRAIL_API_KEY`, `VERITRAIL_ORG_ID`, and `VERITRAIL_API_URL`,
    /// falling back to demo values for local development.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("VERITRAIL_API_KEY").unwrap_or_else(|_| "vt_sk_demo".to_string()),
            std::env::var("VERITRAIL_ORG_ID").unwrap_or_else(|_| "org_demo".to_string()),
            std::env::var("VERITRAIL_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        )
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }
}
