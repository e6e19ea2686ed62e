use crate::config::Config;
use crate::urls_js;
use axum::body::Bytes;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `urls.js` body, rendered once at startup
    pub urls_js: Bytes,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            urls_js: Bytes::from(urls_js::render()),
        }
    }
}
