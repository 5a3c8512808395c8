//! Contract with the prediction backend.

use crate::dam::{DamDetail, DamList};
use crate::district::{ConsumptionData, DistrictSummary};
use crate::forecast::OccupancyForecast;
use crate::metrics::ModelMetrics;

/// Path of every read endpoint, relative to the backend base address.
pub mod endpoints {
    pub const DAMS: &str = "api/dams";
    pub const DAM_DETAIL: &str = "api/dam";
    pub const DISTRICTS: &str = "api/districts";
    pub const FORECAST: &str = "api/predictions/occupancy";
    pub const METRICS: &str = "api/predictions/stats";
    pub const CONSUMPTION: &str = "api/consumption/districts";
}

/// Errors a backend call can end in.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("{endpoint} reported an error: {message}")]
    Backend { endpoint: String, message: String },

    #[error("invalid backend base address: {0}")]
    InvalidBaseUrl(String),
}

/// The read side of the prediction backend.
///
/// Every call is a plain request/response. Implementations must be usable
/// from a single-threaded runtime; the futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Reservoir list and system average occupancy.
    async fn fetch_dams(&self) -> Result<DamList, BackendError>;

    /// District supply summaries.
    async fn fetch_districts(&self) -> Result<Vec<DistrictSummary>, BackendError>;

    /// Thirty-day occupancy forecast for every reservoir.
    async fn fetch_forecast(&self) -> Result<OccupancyForecast, BackendError>;

    /// Consumption model training metrics.
    async fn fetch_metrics(&self) -> Result<ModelMetrics, BackendError>;

    /// Average daily consumption per district.
    async fn fetch_consumption(&self) -> Result<Vec<ConsumptionData>, BackendError>;

    /// Detail record, with ordered recommendations, for one reservoir.
    async fn fetch_dam_detail(&self, name: &str) -> Result<DamDetail, BackendError>;
}
