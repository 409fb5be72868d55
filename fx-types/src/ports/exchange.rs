//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, canned test providers, etc.

use crate::domain::RateTable;

/// Transport-level failure talking to a rate provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExchangeError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("{status} {message}")]
    Status { status: u16, message: String },

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ExchangeError {
    /// Upstream HTTP status, if the provider responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ExchangeError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the latest rates quoted against `base_currency`.
    ///
    /// The code is expected to be normalized by the caller. Each call makes
    /// exactly one request to the provider and retains no state.
    async fn fetch_rates(&self, base_currency: &str) -> Result<RateTable, ExchangeError>;
}
