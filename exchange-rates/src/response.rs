//! Wire format of the `latest` endpoint.

use std::collections::HashMap;

use fx_types::RateTable;
use serde::Deserialize;

/// Body of `GET /v6/<key>/latest/<base>`.
///
/// Provider metadata (`documentation`, `terms_of_use`, `time_last_update_*`,
/// `time_next_update_*`) is not modelled and is dropped during parsing.
#[derive(Debug, Deserialize)]
pub(crate) struct LatestRatesResponse {
    /// `"success"` or `"error"`
    pub result: String,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub conversion_rates: HashMap<String, f64>,
    /// Present on failures, e.g. `unsupported-code` or `invalid-key`
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
}

impl LatestRatesResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    /// Converts the body into a rate table, falling back to the requested
    /// base when the provider omits `base_code`.
    pub fn into_rate_table(self, requested_base: &str) -> RateTable {
        let base = self
            .base_code
            .unwrap_or_else(|| requested_base.to_string());

        if self.result == "success" {
            RateTable::new(base, self.conversion_rates)
        } else {
            RateTable::failed(base)
        }
    }
}
