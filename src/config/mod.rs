#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::numbers_api::DEFAULT_FACT_API_URL;
use crate::core::ConfigProvider;
use crate::utils::error::{ClassifyError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FACT_TIMEOUT_MS: u64 = 2000;
pub const MAX_FACT_TIMEOUT_MS: u64 = 60_000;

/// Process-wide settings, resolved once at startup and handed to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub fact_api_url: String,
    pub fact_timeout_ms: u64,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fact_api_url: DEFAULT_FACT_API_URL.to_string(),
            fact_timeout_ms: DEFAULT_FACT_TIMEOUT_MS,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn fact_timeout(&self) -> Duration {
        Duration::from_millis(self.fact_timeout_ms)
    }

    /// The fact provider must be an absolute http(s) URL with a host.
    fn check_fact_api_url(&self) -> Result<()> {
        let invalid = |reason: String| ClassifyError::InvalidConfigValue {
            field: "fact_api_url".to_string(),
            value: self.fact_api_url.clone(),
            reason,
        };

        let url = Url::parse(&self.fact_api_url).map_err(|e| invalid(format!("Invalid URL: {}", e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("Unsupported scheme: {}", url.scheme())));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("URL has no host".to_string()));
        }
        Ok(())
    }
}

impl ConfigProvider for ServerConfig {
    fn fact_api_url(&self) -> &str {
        &self.fact_api_url
    }

    fn fact_timeout_ms(&self) -> u64 {
        self.fact_timeout_ms
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        self.check_fact_api_url()?;
        validate_range("fact_timeout_ms", self.fact_timeout_ms, 1, MAX_FACT_TIMEOUT_MS)?;
        Ok(())
    }
}
