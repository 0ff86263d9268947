//! Configuration loading for Veritrail.
//! Reads veritrail.toml from the current directory or the path in the
//! VERITRAIL_CONFIG env var; a missing file falls back to defaults. The PORT
//! env var overrides the configured port.

use std::path::Path;

use serde::{Deserialize, Serialize};
use veritrail_store::MetricsWindowing;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Accepted API keys must start with this prefix.
    #[serde(default = "default_api_key_prefix")]
    pub api_key_prefix: String,
}

fn default_api_key_prefix() -> String { "vt_sk_".to_string() }

impl Default for AuthConfig {
    fn default() -> Self {
        Self { api_key_prefix: default_api_key_prefix() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// `all_time` reproduces the historical dashboard numbers (every window
    /// reports the full count); `bucketed` computes real time windows.
    #[serde(default)]
    pub windowing: MetricsWindowing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Insert the demo events at startup.
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
}

fn default_demo_data() -> bool { true }

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_data: default_demo_data() }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("VERITRAIL_CONFIG")
            .unwrap_or_else(|_| "veritrail.toml".to_string());
        let mut config = Self::from_path(&path)?;

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse()?;
        }
        Ok(config)
    }

    fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
