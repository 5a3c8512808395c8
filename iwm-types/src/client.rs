//! reqwest implementation of [`Backend`].

use crate::backend::{endpoints, Backend, BackendError};
use crate::dam::{DamDetail, DamList};
use crate::district::{ConsumptionData, DistrictList, DistrictSummary};
use crate::forecast::OccupancyForecast;
use crate::metrics::ModelMetrics;
use log::debug;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Per-request timeout. A slow backend is retried by the next poll anyway.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the prediction backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Build a client rooted at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base_url =
            Url::parse(base_url).map_err(|e| BackendError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidBaseUrl(base_url.to_string()));
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::InvalidBaseUrl(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `path` plus optional extra segments. Extra segments
    /// are percent-encoded, so reservoir names are safe to pass verbatim.
    pub fn endpoint_url(&self, path: &str, extra: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(path.split('/'))
            .extend(extra);
        Ok(url)
    }

    async fn get_body(&self, endpoint: &str, url: Url) -> Result<String, BackendError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BackendError::Request {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;
        if response.status() != StatusCode::OK {
            debug!("Bad response status for {}: {}", endpoint, response.status());
            return Err(BackendError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }
        response.text().await.map_err(|e| BackendError::Request {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.endpoint_url(path, &[])?;
        let body = self.get_body(path, url).await?;
        decode(path, &body)
    }
}

/// Decode `body` as `T`, turning the backend's `{"error": "..."}` replies
/// into [`BackendError::Backend`].
pub fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, BackendError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| BackendError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })?;
    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(BackendError::Backend {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        });
    }
    serde_json::from_value(value).map_err(|e| BackendError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

impl Backend for HttpBackend {
    async fn fetch_dams(&self) -> Result<DamList, BackendError> {
        self.get_json(endpoints::DAMS).await
    }

    async fn fetch_districts(&self) -> Result<Vec<DistrictSummary>, BackendError> {
        let list: DistrictList = self.get_json(endpoints::DISTRICTS).await?;
        Ok(list.districts)
    }

    async fn fetch_forecast(&self) -> Result<OccupancyForecast, BackendError> {
        self.get_json(endpoints::FORECAST).await
    }

    async fn fetch_metrics(&self) -> Result<ModelMetrics, BackendError> {
        self.get_json(endpoints::METRICS).await
    }

    async fn fetch_consumption(&self) -> Result<Vec<ConsumptionData>, BackendError> {
        self.get_json(endpoints::CONSUMPTION).await
    }

    async fn fetch_dam_detail(&self, name: &str) -> Result<DamDetail, BackendError> {
        let url = self.endpoint_url(endpoints::DAM_DETAIL, &[name])?;
        let body = self.get_body(endpoints::DAM_DETAIL, url).await?;
        decode(endpoints::DAM_DETAIL, &body)
    }
}
