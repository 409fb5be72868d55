//! Conversion Application Service
//!
//! Validates a conversion request, fetches rates through the provider port
//! and computes the converted amount. Contains NO infrastructure logic.

use chrono::Utc;
use fx_types::{ConversionError, ConversionRequest, ConversionResult, CurrencyCode, RateProvider};
use tracing::{debug, error, info};

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// The service holds no mutable state, so one instance can serve any number
/// of concurrent conversions.
pub struct ConversionService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a new conversion service with the given rate provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying rate provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Converts `req.amount` from the source to the target currency.
    ///
    /// Validation failures return before the provider is contacted. Every
    /// other call makes exactly one provider request; rates are never reused
    /// between calls. The converted amount is the raw product of amount and
    /// rate, without rounding.
    #[tracing::instrument(
        skip(self, req),
        fields(source = ?req.source_currency, target = ?req.target_currency, amount = ?req.amount)
    )]
    pub async fn convert(&self, req: ConversionRequest) -> Result<ConversionResult, ConversionError> {
        let amount = match req.amount {
            Some(amount) if amount.is_finite() && amount > 0.0 => amount,
            _ => return Err(ConversionError::InvalidAmount),
        };

        let source = CurrencyCode::parse(req.source_currency.as_deref());
        let target = CurrencyCode::parse(req.target_currency.as_deref());
        let (Some(source), Some(target)) = (source, target) else {
            return Err(ConversionError::MissingCurrency);
        };

        debug!("Calling rate provider for base currency: {}", source);

        let table = self
            .provider
            .fetch_rates(source.as_str())
            .await
            .inspect_err(|e| error!("Rate provider unavailable: {}", e))?;

        if !table.success {
            error!(base = %table.base_currency, "Rate provider reported failure");
            return Err(ConversionError::ProviderError);
        }

        debug!(count = table.rates.len(), "Received rate table");

        let rate = table
            .rate_for(target.as_str())
            .ok_or_else(|| ConversionError::UnknownCurrency(target.to_string()))?;

        let target_amount = amount * rate;
        if !target_amount.is_finite() {
            return Err(ConversionError::Unexpected(format!(
                "conversion of {} {} to {} at rate {} is not representable",
                amount, source, target, rate
            )));
        }

        info!(
            "Conversion successful. Rate: {}, Converted amount: {}",
            rate, target_amount
        );

        Ok(ConversionResult {
            source_currency: source.into_string(),
            target_currency: target.into_string(),
            source_amount: amount,
            target_amount,
            exchange_rate: rate,
            timestamp: Utc::now(),
        })
    }
}
