//! Currency code value type.

use serde::{Deserialize, Serialize};

/// Currency codes advertised by `GET /api/currency/supported-currencies`.
///
/// Informational only: requests are never validated against this list, the
/// upstream provider decides which codes exist.
pub const SUPPORTED_CURRENCIES: [&str; 9] = [
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "INR",
];

/// A normalized (trimmed, uppercase) currency code such as `USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Normalizes raw user input into a currency code.
    ///
    /// Returns `None` when the input is absent or blank. Matching is
    /// case-insensitive: `" usd "` becomes `USD`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
