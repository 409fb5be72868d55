//! # FX Client SDK
//!
//! A typed Rust client for the Currency Conversion API.

use fx_types::{ConversionRequest, ConversionResult, ErrorResponse};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Currency Conversion API client.
pub struct FxClient {
    base_url: String,
    http: Client,
}

impl FxClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Converts an amount via `POST /api/currency/convert`.
    pub async fn convert(
        &self,
        source_currency: &str,
        target_currency: &str,
        amount: f64,
    ) -> Result<ConversionResult, ClientError> {
        let req = ConversionRequest::new(source_currency, target_currency, amount);
        self.post("/api/currency/convert", &req).await
    }

    /// Converts an amount via the path-style GET endpoint.
    pub async fn convert_path(
        &self,
        source_currency: &str,
        target_currency: &str,
        amount: f64,
    ) -> Result<ConversionResult, ClientError> {
        let mut url = self.url()?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend([
                "api",
                "currency",
                "convert",
                source_currency,
                "to",
                target_currency,
            ]);
        url.query_pairs_mut()
            .append_pair("amount", &amount.to_string());

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Lists the currency codes advertised by the server.
    pub async fn supported_currencies(&self) -> Result<Vec<String>, ClientError> {
        self.get("/api/currency/supported-currencies").await
    }

    fn url(&self) -> Result<Url, ClientError> {
        Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
