//! # FX Hex
//!
//! Conversion service and HTTP adapter for the currency conversion API.
//!
//! ## Architecture
//!
//! - `service/` - Conversion engine (validation, rate lookup, computation)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - Generated API documentation
//!
//! The service is generic over `P: RateProvider`, allowing the live
//! ExchangeRate-API client to be swapped for canned providers in tests.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::ConversionService;
