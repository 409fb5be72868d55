//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use fx_types::{
    AppError, ConversionError, ConversionRequest, ErrorResponse, RateProvider, SUPPORTED_CURRENCIES,
};

use crate::ConversionService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ConversionService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream { status, message } => (upstream_status(status), message),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", message);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", message);
        }

        (status, Json(ErrorResponse::now(status.as_u16(), message))).into_response()
    }
}

/// Mirrors the provider's error status; 502 when it never answered.
fn upstream_status(status: Option<u16>) -> StatusCode {
    status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Query string of the path-style conversion endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AmountQuery {
    /// The amount to convert (must be greater than 0)
    #[param(value_type = f64, example = 100.0)]
    pub amount: Option<String>,
}

impl AmountQuery {
    /// Unparseable amounts are treated as absent and rejected by the service.
    pub fn parsed(&self) -> Option<f64> {
        self.amount.as_deref()?.trim().parse().ok()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert an amount using a JSON request body.
#[tracing::instrument(skip(state, payload))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    tracing::info!("Received conversion request: {:?}", req);

    let result = state.service.convert(req).await?;
    Ok(Json(result))
}

/// Convert an amount using path variables and an `amount` query parameter.
#[tracing::instrument(skip(state), fields(source = %source, target = %target))]
pub async fn convert_path<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Path((source, target)): Path<(String, String)>,
    Query(query): Query<AmountQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let req = ConversionRequest {
        source_currency: Some(source),
        target_currency: Some(target),
        amount: query.parsed(),
    };
    tracing::info!("Received path conversion request: {:?}", req);

    let result = state.service.convert(req).await?;
    Ok(Json(result))
}

/// List the currency codes advertised to clients.
pub async fn supported_currencies() -> impl IntoResponse {
    Json(SUPPORTED_CURRENCIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_query_parsing() {
        let query = |amount: Option<&str>| AmountQuery {
            amount: amount.map(String::from),
        };

        assert_eq!(query(Some("100.5")).parsed(), Some(100.5));
        assert_eq!(query(Some(" 42 ")).parsed(), Some(42.0));
        assert_eq!(query(Some("abc")).parsed(), None);
        assert_eq!(query(Some("")).parsed(), None);
        assert_eq!(query(None).parsed(), None);
    }

    #[test]
    fn test_upstream_status_passthrough() {
        assert_eq!(upstream_status(Some(503)), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(upstream_status(Some(403)), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_upstream_status_fallback() {
        assert_eq!(upstream_status(None), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream_status(Some(200)), StatusCode::BAD_GATEWAY);
        assert_eq!(upstream_status(Some(1000)), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_conversion_error_status_codes() {
        let status = |err: ConversionError| ApiError::from(err).into_response().status();

        assert_eq!(status(ConversionError::InvalidAmount), StatusCode::BAD_REQUEST);
        assert_eq!(status(ConversionError::MissingCurrency), StatusCode::BAD_REQUEST);
        assert_eq!(status(ConversionError::ProviderError), StatusCode::BAD_REQUEST);
        assert_eq!(
            status(ConversionError::UnknownCurrency("XYZ".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(ConversionError::Unexpected("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
