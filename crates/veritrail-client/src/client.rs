//! HTTP client that ships audit events to the server with bounded retries.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use veritrail_store::NewAuditEvent;

use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error [{status}]: {message}")]
    Api { status: u16, message: String },

    #[error("Gave up after {0} attempts")]
    Exhausted(u32),
}

/// Server acknowledgement for one logged event.
#[derive(Debug, Clone, Deserialize)]
pub struct LogReceipt {
    pub success: bool,
    pub audit_log_id: Uuid,
    pub content_hash: String,
    pub indexed_at: DateTime<Utc>,
}

pub struct AuditClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl AuditClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// POST one audit event. Retries transport failures and 5xx responses
    /// with a short linear backoff; 4xx responses fail immediately since a
    /// resend cannot succeed.
    pub async fn log(&self, event: &NewAuditEvent) -> Result<LogReceipt, ClientError> {
        let url = format!("{}/api/v1/audit/log", self.config.base_url);
        let attempts = self.config.retry_count.max(1);

        for attempt in 1..=attempts {
            match self.try_log(&url, event).await {
                Ok(receipt) => return Ok(receipt),
                Err(err @ ClientError::Api { status, .. }) if status < 500 => return Err(err),
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "audit log attempt failed");
                    if attempt < attempts {
                        tokio::time::sleep(Duration::from_millis(250 * attempt as u64)).await;
                    }
                }
            }
        }
        Err(ClientError::Exhausted(attempts))
    }

    async fn try_log(&self, url: &str, event: &NewAuditEvent) -> Result<LogReceipt, ClientError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(event)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body["detail"]
                .as_str()
                .unwrap_or("unknown API error")
                .to_string();
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }

    pub fn organization_id(&self) -> &str {
        &self.config.organization_id
    }
}
