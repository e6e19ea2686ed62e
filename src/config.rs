use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub urls_js_max_age_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let urls_js_max_age_secs = lookup("URLS_JS_MAX_AGE_SECS")
            .unwrap_or_else(|| "3600".to_string())
            .parse::<u64>()
            .context("URLS_JS_MAX_AGE_SECS must be a non-negative number of seconds")?;

        Ok(Config {
            service_port,
            service_host,
            urls_js_max_age_secs,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  urls.js max-age: {}s", self.urls_js_max_age_secs);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            urls_js_max_age_secs: 3600,
        }
    }
}
