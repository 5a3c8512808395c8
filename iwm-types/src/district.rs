use crate::status::{Status, StatusRef};
use serde::{Deserialize, Serialize};

/// Supply summary for one consumption district.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DistrictSummary {
    pub name: String,
    pub status: Status,
    /// Days of supply left at current consumption.
    #[serde(default)]
    pub days_supply: f64,
    /// Daily consumption in cubic metres.
    #[serde(default)]
    pub daily_cons: f64,
    /// Free-text phrase naming what drives consumption (residential, industry...).
    #[serde(default)]
    pub primary_driver: String,
    /// Reservoirs feeding the district, referenced by name.
    #[serde(default)]
    pub source_dams: Vec<StatusRef>,
}

/// Body of `/api/districts`.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct DistrictList {
    #[serde(default)]
    pub districts: Vec<DistrictSummary>,
}

/// One row of `/api/consumption/districts`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ConsumptionData {
    pub district_name: String,
    pub avg_daily_m3: f64,
    #[serde(default)]
    pub primary_driver: String,
}
