use crate::recommendation::Recommendation;
use crate::status::{Status, StatusRef};
use serde::{Deserialize, Serialize};

/// A monitored reservoir as listed by `/api/dams`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Dam {
    /// Unique reservoir name, also the key of the forecast map.
    pub name: String,
    /// Current fill level in percent, 0 to 100.
    pub occupancy_pct: f64,
    /// Capacity in cubic metres.
    pub capacity_m3: f64,
    /// Current stored volume in cubic metres.
    pub volume_m3: f64,
    pub status: Status,
    #[serde(default)]
    pub connected_districts_count: u32,
    /// Backend estimate of days until usable volume is exhausted.
    #[serde(default)]
    pub days_to_crisis: f64,
}

/// Body of `/api/dams`: the reservoir list plus the capacity-weighted
/// system average.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct DamList {
    #[serde(default)]
    pub dams: Vec<Dam>,
    #[serde(default)]
    pub general_occupancy_pct: f64,
}

/// Full record for one reservoir, fetched when the operator inspects it.
///
/// `recommendations` keeps the backend order; the first entry is the
/// default scenario.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DamDetail {
    #[serde(rename = "dam", alias = "name")]
    pub name: String,
    pub occupancy_pct: f64,
    pub capacity_m3: f64,
    pub volume_m3: f64,
    pub status: Status,
    #[serde(default)]
    pub days_to_crisis: f64,
    #[serde(default)]
    pub connected_districts: Vec<StatusRef>,
    #[serde(default)]
    pub connected_districts_count: u32,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl DamDetail {
    /// Recommendation at `index`, if the index is inside the list.
    pub fn recommendation(&self, index: usize) -> Option<&Recommendation> {
        self.recommendations.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dam_list_decodes_integer_days() {
        let body = r#"{
            "dams": [{"name": "Omerli", "occupancy_pct": 13.11, "capacity_m3": 244540000,
                      "volume_m3": 32059194.0, "status": "CRITICAL",
                      "connected_districts_count": 7, "days_to_crisis": 41}],
            "general_occupancy_pct": 17.12
        }"#;
        let list: DamList = serde_json::from_str(body).unwrap();
        assert_eq!(list.dams.len(), 1);
        assert_eq!(list.dams[0].days_to_crisis, 41.0);
        assert_eq!(list.dams[0].status, Status::Critical);
        assert_eq!(list.general_occupancy_pct, 17.12);
    }

    #[test]
    fn test_empty_dam_list_when_model_not_loaded() {
        let list: DamList = serde_json::from_str(r#"{"dams": [], "general_occupancy_pct": 0}"#).unwrap();
        assert!(list.dams.is_empty());
    }

    #[test]
    fn test_detail_is_keyed_by_dam() {
        let body = r#"{
            "dam": "Darlik", "occupancy_pct": 27.65, "capacity_m3": 102463000,
            "volume_m3": 28331019.5, "status": "WARNING", "days_to_crisis": 63.4,
            "recommendations": [],
            "connected_districts": [{"name": "Kadikoy", "status": "SAFE"}],
            "connected_districts_count": 1
        }"#;
        let detail: DamDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.name, "Darlik");
        assert_eq!(detail.connected_districts[0].name, "Kadikoy");
        assert!(detail.recommendation(0).is_none());
    }
}
