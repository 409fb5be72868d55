//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fx_types::dto::{ConversionRequest, ConversionResult, ErrorResponse};
use utoipa::OpenApi;

use crate::inbound::AmountQuery;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert currency (POST method)
///
/// Converts an amount from one currency to another using current exchange rates.
#[utoipa::path(
    post,
    path = "/api/currency/convert",
    tag = "conversion",
    request_body = ConversionRequest,
    responses(
        (status = 200, description = "Conversion successful", body = ConversionResult),
        (status = 400, description = "Invalid amount, missing currency, or provider rejected the request", body = ErrorResponse),
        (status = 404, description = "Target currency not found in available rates", body = ErrorResponse),
        (status = 502, description = "Exchange rate service unreachable", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    )
)]
async fn convert() {}

/// Convert currency (GET method)
///
/// Path variables select the currencies, the `amount` query parameter the amount.
#[utoipa::path(
    get,
    path = "/api/currency/convert/{source}/to/{target}",
    tag = "conversion",
    params(
        ("source" = String, Path, description = "Source currency code (e.g., USD)", example = "USD"),
        ("target" = String, Path, description = "Target currency code (e.g., EUR)", example = "EUR"),
        AmountQuery
    ),
    responses(
        (status = 200, description = "Conversion successful", body = ConversionResult),
        (status = 400, description = "Invalid or missing amount", body = ErrorResponse),
        (status = 404, description = "Target currency not found in available rates", body = ErrorResponse),
        (status = 502, description = "Exchange rate service unreachable", body = ErrorResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    )
)]
async fn convert_path() {}

/// Get supported currencies
///
/// Reference list for clients; conversions are not restricted to it.
#[utoipa::path(
    get,
    path = "/api/currency/supported-currencies",
    tag = "conversion",
    responses(
        (status = 200, description = "Supported currency codes", body = Vec<String>,
            example = json!(["USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "INR"]))
    )
)]
async fn supported_currencies() {}

/// OpenAPI documentation for the Currency Conversion API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Conversion API",
        version = "1.0.0",
        description = "Converts a sum of money from one currency to another using exchange rates retrieved on demand from ExchangeRate-API.",
        license(name = "MIT"),
    ),
    paths(health, convert, convert_path, supported_currencies),
    components(schemas(ConversionRequest, ConversionResult, ErrorResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "conversion", description = "Currency conversion operations"),
    )
)]
pub struct ApiDoc;
