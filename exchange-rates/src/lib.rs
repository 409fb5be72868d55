//! ExchangeRate-API adapter for the [`RateProvider`] port.
//!
//! Fetches the latest rate table for a base currency from
//! `<base-url>/v6/<api-key>/latest/<base>` and reduces the provider body to
//! the fields the conversion service needs.
//!
//! # Example
//! ```no_run
//! use exchange_rates::ExchangeRateApiClient;
//! use fx_types::RateProvider;
//!
//! # async fn run() -> Result<(), fx_types::ExchangeError> {
//! let client = ExchangeRateApiClient::new(exchange_rates::DEFAULT_BASE_URL, "my-api-key");
//! let table = client.fetch_rates("USD").await?;
//! println!("1 USD = {:?} EUR", table.rate_for("EUR"));
//! # Ok(())
//! # }
//! ```
//!
//! [`RateProvider`]: fx_types::RateProvider

mod client;
mod response;

pub use client::{DEFAULT_BASE_URL, ExchangeRateApiClient, MAX_BODY_BYTES};
