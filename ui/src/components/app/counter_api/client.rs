//! reqwest client implementing the counter service HTTP contract.

use counter_core::service::CounterService;
use counter_core::{CounterApiError, CounterSnapshot, IncrementRequest};
use log::debug;

use crate::util::service_origin_from_window;

/// HTTP client for the counter service. No timeouts are configured; a hung
/// request resolves through transport-level failure.
#[derive(Clone)]
pub struct HttpCounterClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpCounterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at the origin derived from the page's own location.
    pub fn from_window() -> Self {
        Self::new(service_origin_from_window())
    }

    fn counter_url(&self) -> String {
        format!("{}/api/counter", self.base_url)
    }

    async fn decode(response: reqwest::Response) -> Result<CounterSnapshot, CounterApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(CounterApiError::Status(status.as_u16()));
        }
        response
            .json::<CounterSnapshot>()
            .await
            .map_err(|e| CounterApiError::InvalidResponse(e.to_string()))
    }
}

impl CounterService for HttpCounterClient {
    async fn probe(&self) -> Result<(), CounterApiError> {
        debug!("Probing counter service at {}", self.base_url);
        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| CounterApiError::Transport(e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(CounterApiError::Status(response.status().as_u16()))
        }
    }

    async fn fetch(&self) -> Result<CounterSnapshot, CounterApiError> {
        let response = self
            .http
            .get(self.counter_url())
            .send()
            .await
            .map_err(|e| CounterApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn increment(&self) -> Result<CounterSnapshot, CounterApiError> {
        let response = self
            .http
            .post(self.counter_url())
            .json(&IncrementRequest::one())
            .send()
            .await
            .map_err(|e| CounterApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn reset(&self) -> Result<CounterSnapshot, CounterApiError> {
        let response = self
            .http
            .delete(self.counter_url())
            .send()
            .await
            .map_err(|e| CounterApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }
}
