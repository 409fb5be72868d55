//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use exchange_rates::DEFAULT_BASE_URL;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub provider_base_url: String,
    pub provider_api_key: String,
    pub provider_timeout: Option<Duration>,
    /// OTLP collector endpoint; span export is disabled when unset
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()?;

        let provider_base_url =
            var("EXCHANGE_RATE_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let provider_api_key = var("EXCHANGE_RATE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("EXCHANGE_RATE_API_KEY environment variable is required"))?;

        let provider_timeout = var("EXCHANGE_RATE_API_TIMEOUT_SECS")
            .map(|secs| secs.parse().map(Duration::from_secs))
            .transpose()?;

        let otlp_endpoint = var("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.is_empty());

        Ok(Self {
            port,
            provider_base_url,
            provider_api_key,
            provider_timeout,
            otlp_endpoint,
        })
    }
}
