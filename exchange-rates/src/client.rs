//! HTTP client for ExchangeRate-API v6.

use std::time::Duration;

use async_trait::async_trait;
use fx_types::{ExchangeError, RateProvider, RateTable};
use reqwest::{Client, Response, Url};
use tracing::{debug, instrument, warn};

use crate::response::LatestRatesResponse;

/// Public ExchangeRate-API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com";

/// Largest provider body buffered in memory (16 MiB).
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// ExchangeRate-API client.
///
/// The API key is part of the request path, so URLs are never logged and
/// transport errors are stripped of their URL before being surfaced.
#[derive(Clone)]
pub struct ExchangeRateApiClient {
    base_url: String,
    api_key: String,
    max_body_bytes: usize,
    http: Client,
}

impl ExchangeRateApiClient {
    /// Creates a new client using a default reqwest client (no timeout).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            max_body_bytes: MAX_BODY_BYTES,
            http: Client::new(),
        }
    }

    /// Creates a new client whose requests fail after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ExchangeError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        Ok(Self::new(base_url, api_key).with_http_client(http))
    }

    /// Replaces the underlying reqwest client.
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Overrides the response body cap (defaults to [`MAX_BODY_BYTES`]).
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `<base>/v6/<key>/latest/<code>`.
    ///
    /// Key and code are pushed as single path segments, so `/`, `?` and `#`
    /// are percent-encoded and cannot reach another provider path.
    fn latest_url(&self, base_currency: &str) -> Result<Url, ExchangeError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ExchangeError::Transport(format!("invalid provider base URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| ExchangeError::Transport("provider base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["v6", self.api_key.as_str(), "latest", base_currency]);

        Ok(url)
    }

    async fn read_body(&self, mut response: Response) -> Result<Vec<u8>, ExchangeError> {
        if response
            .content_length()
            .is_some_and(|len| len > self.max_body_bytes as u64)
        {
            return Err(body_too_large(self.max_body_bytes));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(transport_error)? {
            if body.len() + chunk.len() > self.max_body_bytes {
                return Err(body_too_large(self.max_body_bytes));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

impl std::fmt::Debug for ExchangeRateApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRateApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiClient {
    #[instrument(name = "ExchangeRateApiFetch", skip(self), fields(base = %base_currency))]
    async fn fetch_rates(&self, base_currency: &str) -> Result<RateTable, ExchangeError> {
        let response = self
            .http
            .get(self.latest_url(base_currency)?)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = self.read_body(response).await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received provider response");

        if !status.is_success() {
            // Error bodies usually still carry an `error-type`; prefer it over the reason phrase.
            let message = serde_json::from_slice::<LatestRatesResponse>(&body)
                .ok()
                .and_then(|r| r.error_type)
                .or_else(|| status.canonical_reason().map(String::from))
                .unwrap_or_default();
            warn!(status = status.as_u16(), %message, "Provider returned error status");
            return Err(ExchangeError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: LatestRatesResponse =
            serde_json::from_slice(&body).map_err(|e| ExchangeError::Decode(e.to_string()))?;

        if !parsed.is_success() {
            warn!(
                error_type = parsed.error_type.as_deref().unwrap_or("unknown"),
                "Provider reported failure"
            );
        }

        Ok(parsed.into_rate_table(base_currency))
    }
}

fn transport_error(err: reqwest::Error) -> ExchangeError {
    if err.is_timeout() {
        return ExchangeError::Transport("request timed out".into());
    }
    ExchangeError::Transport(err.without_url().to_string())
}

fn body_too_large(limit: usize) -> ExchangeError {
    ExchangeError::Decode(format!("response body exceeds {} bytes", limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-key";

    const USD_RESPONSE: &str = r#"{
        "result": "success",
        "documentation": "https://www.exchangerate-api.com/docs",
        "terms_of_use": "https://www.exchangerate-api.com/terms",
        "time_last_update_unix": 1714608001,
        "base_code": "USD",
        "conversion_rates": {"USD": 1, "EUR": 0.9168, "GBP": 0.7987}
    }"#;

    async fn create_mock_server(base: &str, template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/v6/{}/latest/{}", API_KEY, base)))
            .respond_with(template)
            .expect(1)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ExchangeRateApiClient::new("http://localhost:9000/", API_KEY);
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(
            client.latest_url("USD").unwrap().as_str(),
            "http://localhost:9000/v6/test-key/latest/USD"
        );
    }

    #[test]
    fn test_currency_code_is_a_single_encoded_segment() {
        let client = ExchangeRateApiClient::new("http://localhost:9000", API_KEY);

        let url = client.latest_url("GBP/../EUR").unwrap();
        assert_eq!(url.path(), "/v6/test-key/latest/GBP%2F..%2FEUR");

        let url = client.latest_url("EUR#JUNK").unwrap();
        assert_eq!(url.path(), "/v6/test-key/latest/EUR%23JUNK");
        assert_eq!(url.fragment(), None);

        let url = client.latest_url("EUR?x=1").unwrap();
        assert_eq!(url.query(), None);
    }

    #[tokio::test]
    async fn test_crafted_code_cannot_reach_another_base() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/v6/{}/latest/EUR", API_KEY)))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"result": "success", "base_code": "EUR", "conversion_rates": {"USD": 1.09}}"#,
            ))
            .expect(0)
            .mount(&mock_server)
            .await;
        let client = ExchangeRateApiClient::new(mock_server.uri(), API_KEY);

        for code in ["EUR#JUNK", "GBP/../EUR", "EUR?base=EUR", "../latest/EUR"] {
            let result = client.fetch_rates(code).await;
            assert!(result.is_err(), "{} resolved to {:?}", code, result);
        }
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_transport_error() {
        let client = ExchangeRateApiClient::new("not a url", API_KEY);

        let err = client.fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, ExchangeError::Transport(_)));
        assert!(!err.to_string().contains(API_KEY));
    }

    #[tokio::test]
    async fn test_oversized_body_is_decode_error() {
        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200).set_body_string(USD_RESPONSE),
        )
        .await;
        let client = ExchangeRateApiClient::new(mock_server.uri(), API_KEY).with_max_body_bytes(64);

        let err = client.fetch_rates("USD").await.unwrap_err();

        assert_eq!(
            err,
            ExchangeError::Decode("response body exceeds 64 bytes".into())
        );
    }

    #[tokio::test]
    async fn test_body_at_cap_is_read() {
        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200).set_body_string(USD_RESPONSE),
        )
        .await;
        let client = ExchangeRateApiClient::new(mock_server.uri(), API_KEY)
            .with_max_body_bytes(USD_RESPONSE.len());

        let table = client.fetch_rates("USD").await.unwrap();

        assert_eq!(table.rate_for("EUR"), Some(0.9168));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = ExchangeRateApiClient::new(DEFAULT_BASE_URL, "super-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn test_successful_rate_fetch() {
        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200).set_body_string(USD_RESPONSE),
        )
        .await;
        let client = ExchangeRateApiClient::new(mock_server.uri(), API_KEY);

        let table = client.fetch_rates("USD").await.expect("Failed to fetch rates");

        assert!(table.success);
        assert_eq!(table.base_currency, "USD");
        assert_eq!(table.rate_for("EUR"), Some(0.9168));
        assert_eq!(table.rate_for("GBP"), Some(0.7987));
    }

    #[tokio::test]
    async fn test_provider_failure_body_is_not_success() {
        let mock_server = create_mock_server(
            "ABC",
            ResponseTemplate::new(200)
                .set_body_string(r#"{"result": "error", "error-type": "unsupported-code"}"#),
        )
        .await;
        let client = ExchangeRateApiClient::new(mock_server.uri(), API_KEY);

        let table = client.fetch_rates("ABC").await.unwrap();

        assert!(!table.success);
        assert!(table.rates.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_surfaces_status() {
        let mock_server = create_mock_server("USD", ResponseTemplate::new(503)).await;
        let client = ExchangeRateApiClient::new(mock_server.uri(), API_KEY);

        let err = client.fetch_rates("USD").await.unwrap_err();

        assert_eq!(
            err,
            ExchangeError::Status {
                status: 503,
                message: "Service Unavailable".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_prefers_error_type() {
        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(403)
                .set_body_string(r#"{"result": "error", "error-type": "invalid-key"}"#),
        )
        .await;
        let client = ExchangeRateApiClient::new(mock_server.uri(), API_KEY);

        let err = client.fetch_rates("USD").await.unwrap_err();

        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "403 invalid-key");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200).set_body_string(r#"{"conversion_rates": "nope"}"#),
        )
        .await;
        let client = ExchangeRateApiClient::new(mock_server.uri(), API_KEY);

        let err = client.fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, ExchangeError::Decode(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200)
                .set_body_string(USD_RESPONSE)
                .set_delay(Duration::from_millis(500)),
        )
        .await;
        let client = ExchangeRateApiClient::with_timeout(
            mock_server.uri(),
            API_KEY,
            Duration::from_millis(50),
        )
        .unwrap();

        let err = client.fetch_rates("USD").await.unwrap_err();

        assert_eq!(err, ExchangeError::Transport("request timed out".into()));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Nothing listens on the discard port.
        let client = ExchangeRateApiClient::new("http://127.0.0.1:9", API_KEY);

        let err = client.fetch_rates("USD").await.unwrap_err();

        assert!(matches!(err, ExchangeError::Transport(_)));
        assert!(!err.to_string().contains(API_KEY));
    }
}
