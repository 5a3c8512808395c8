use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Thirty-day occupancy forecast for every reservoir.
///
/// Each series in `dams` should have one value per entry of `dates`. The
/// backend does not guarantee it, so readers go through [`Self::series`],
/// which never yields more points than there are dates.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct OccupancyForecast {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub dams: BTreeMap<String, Vec<f64>>,
}

impl OccupancyForecast {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() || self.dams.is_empty()
    }

    /// Forecast values for `dam`, cut to the length of `dates`.
    pub fn series(&self, dam: &str) -> &[f64] {
        match self.dams.get(dam) {
            Some(values) => &values[..values.len().min(self.dates.len())],
            None => &[],
        }
    }

    /// Names of reservoirs whose series length differs from `dates`.
    pub fn misaligned(&self) -> Vec<&str> {
        self.dams
            .iter()
            .filter(|(_, values)| values.len() != self.dates.len())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_decodes_to_empty_forecast() {
        let forecast: OccupancyForecast = serde_json::from_str("{}").unwrap();
        assert!(forecast.is_empty());
        assert!(forecast.series("Omerli").is_empty());
    }

    #[test]
    fn test_series_is_cut_to_dates() {
        let forecast: OccupancyForecast = serde_json::from_str(
            r#"{"dates": ["2025-12-08", "2025-12-09"],
                "dams": {"Omerli": [13.0, 12.9, 12.8], "Elmali": [50.6]}}"#,
        )
        .unwrap();
        assert_eq!(forecast.series("Omerli"), &[13.0, 12.9]);
        assert_eq!(forecast.series("Elmali"), &[50.6]);
        assert_eq!(forecast.misaligned(), vec!["Elmali", "Omerli"]);
    }
}
