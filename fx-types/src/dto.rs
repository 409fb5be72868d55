//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount from one currency to another.
///
/// Every field is optional on the wire so that absent values reach the
/// conversion service and are reported as typed validation failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({"sourceCurrency": "USD", "targetCurrency": "EUR", "amount": 100.0}))]
pub struct ConversionRequest {
    /// Currency code to convert from (case-insensitive)
    #[schema(example = "USD")]
    pub source_currency: Option<String>,
    /// Currency code to convert to (case-insensitive)
    #[schema(example = "EUR")]
    pub target_currency: Option<String>,
    /// Amount in the source currency, must be greater than zero
    #[schema(example = 100.0)]
    pub amount: Option<f64>,
}

impl ConversionRequest {
    pub fn new(
        source_currency: impl Into<String>,
        target_currency: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            source_currency: Some(source_currency.into()),
            target_currency: Some(target_currency.into()),
            amount: Some(amount),
        }
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "sourceCurrency": "USD",
    "targetCurrency": "EUR",
    "sourceAmount": 100.0,
    "targetAmount": 91.68,
    "exchangeRate": 0.9168,
    "timestamp": "2025-05-02T10:15:30.123Z"
}))]
pub struct ConversionResult {
    /// Normalized source currency code
    pub source_currency: String,
    /// Normalized target currency code
    pub target_currency: String,
    /// Amount in the source currency
    pub source_amount: f64,
    /// Converted amount in the target currency, unrounded
    pub target_amount: f64,
    /// Units of target currency per one unit of source currency
    pub exchange_rate: f64,
    /// When the conversion was computed
    pub timestamp: DateTime<Utc>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Error DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"status": 400, "message": "Amount must be greater than zero", "timestamp": 1714640530123i64}))]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Human-readable description of the failure
    pub message: String,
    /// When the error occurred, in milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl ErrorResponse {
    /// Creates an error body stamped with the current time.
    pub fn now(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
