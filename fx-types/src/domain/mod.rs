//! Domain models for the conversion service.

pub mod currency;
pub mod rates;

pub use currency::{CurrencyCode, SUPPORTED_CURRENCIES};
pub use rates::RateTable;
