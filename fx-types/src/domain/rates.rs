//! Rate table returned by a rate provider.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Exchange rates for one base currency at one point in time.
///
/// Built fresh for every conversion and dropped with it; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Currency the rates are quoted against
    pub base_currency: String,
    /// Units of the keyed currency per one unit of `base_currency`
    pub rates: HashMap<String, f64>,
    /// Whether the provider reported success
    pub success: bool,
}

impl RateTable {
    /// Creates a successful rate table.
    pub fn new(base_currency: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base_currency: base_currency.into(),
            rates,
            success: true,
        }
    }

    /// Creates a rate table for a provider response that reported failure.
    pub fn failed(base_currency: impl Into<String>) -> Self {
        Self {
            base_currency: base_currency.into(),
            rates: HashMap::new(),
            success: false,
        }
    }

    /// Looks up the rate for `code`. Codes are matched exactly.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }
}
