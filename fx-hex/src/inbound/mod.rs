//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the conversion service.

pub(crate) mod handlers;
mod server;

pub use handlers::{AmountQuery, ApiError, AppState};
pub use server::HttpServer;
