//! Error types for the conversion service.

use crate::ports::ExchangeError;

/// Why a conversion could not complete.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Source and target currencies must be specified")]
    MissingCurrency,

    #[error("Target currency {0} not found in available rates")]
    UnknownCurrency(String),

    #[error("Failed to retrieve exchange rates")]
    ProviderError,

    #[error("Error communicating with exchange rate service: {message}")]
    ProviderUnavailable {
        /// Upstream HTTP status, when the provider answered at all
        status: Option<u16>,
        message: String,
    },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl From<ExchangeError> for ConversionError {
    fn from(err: ExchangeError) -> Self {
        let status = err.status();
        ConversionError::ProviderUnavailable {
            status,
            message: err.to_string(),
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidAmount
            | ConversionError::MissingCurrency
            | ConversionError::ProviderError => AppError::BadRequest(err.to_string()),
            ConversionError::UnknownCurrency(_) => AppError::NotFound(err.to_string()),
            ConversionError::ProviderUnavailable { status, .. } => AppError::Upstream {
                status,
                message: err.to_string(),
            },
            ConversionError::Unexpected(_) => AppError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_currency_message_names_code() {
        let err = ConversionError::UnknownCurrency("XYZ".into());
        assert_eq!(
            err.to_string(),
            "Target currency XYZ not found in available rates"
        );
    }

    #[test]
    fn test_exchange_status_error_keeps_upstream_status() {
        let err: ConversionError = ExchangeError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        }
        .into();
        assert!(matches!(
            err,
            ConversionError::ProviderUnavailable {
                status: Some(503),
                ..
            }
        ));
    }

    #[test]
    fn test_exchange_transport_error_has_no_status() {
        let err: ConversionError = ExchangeError::Transport("connection refused".into()).into();
        assert!(matches!(
            err,
            ConversionError::ProviderUnavailable { status: None, .. }
        ));
    }

    #[test]
    fn test_app_error_mapping() {
        assert!(matches!(
            AppError::from(ConversionError::InvalidAmount),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(ConversionError::MissingCurrency),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(ConversionError::ProviderError),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            AppError::from(ConversionError::UnknownCurrency("XYZ".into())),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(ConversionError::Unexpected("boom".into())),
            AppError::Internal(_)
        ));
    }
}
