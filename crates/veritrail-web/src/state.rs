//! Shared application state for the web server.

use std::sync::Arc;

use veritrail_store::AuditStore;

use crate::config::Config;

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AuditStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn AuditStore>, config: Config) -> Self {
        Self { store, config }
    }
}

pub type SharedState = Arc<AppState>;
