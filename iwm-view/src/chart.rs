//! Chart-ready series derived from snapshot entities.
//!
//! Every function here is pure and accepts empty input, returning an empty
//! series rather than failing. All structs serialize to JSON for the
//! charting surface.

use crate::localization::Dictionary;
use iwm_types::dam::Dam;
use iwm_types::district::ConsumptionData;
use iwm_types::forecast::OccupancyForecast;
use iwm_types::metrics::ModelMetrics;
use log::debug;
use serde::Serialize;

/// Colour for reservoirs missing from [`DAM_COLORS`].
pub const DEFAULT_COLOR: &str = "#9E9E9E";

/// Fixed colour per reservoir, shared by every chart so a reservoir keeps
/// its colour across views.
pub static DAM_COLORS: &[(&str, &str)] = &[
    ("Omerli", "#1565C0"),
    ("Darlik", "#2E7D32"),
    ("Elmali", "#F9A825"),
    ("Terkos", "#6A1B9A"),
    ("Alibey", "#C62828"),
    ("Buyukcekmece", "#00838F"),
    ("Sazlidere", "#EF6C00"),
    ("Istrancalar", "#4E342E"),
    ("Kazandere", "#AD1457"),
    ("Pabucdere", "#283593"),
];

/// Occupancy below which the backend flags a reservoir WARNING.
pub const ALERT_THRESHOLD_PCT: f64 = 40.0;
/// Occupancy below which the backend flags a reservoir CRITICAL.
pub const CRITICAL_THRESHOLD_PCT: f64 = 18.0;

/// Number of bars in the feature importance chart.
pub const TOP_FEATURES: usize = 5;

pub fn dam_color(name: &str) -> &'static str {
    DAM_COLORS
        .iter()
        .find(|(dam, _)| *dam == name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// A single (date, value) pair used for line chart data points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateValue {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<DateValue>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LineChart {
    pub dates: Vec<String>,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    /// Share of the total, in percent.
    pub share_pct: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DonutChart {
    pub total: f64,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReferenceLine {
    pub label: String,
    pub value: f64,
}

/// Rendering hints passed alongside a series.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub y_axis_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_max: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reference_lines: Vec<ReferenceLine>,
}

/// One line per reservoir over the forecast dates. A series shorter than
/// `dates` contributes only the points it has.
pub fn forecast_series(forecast: &OccupancyForecast) -> LineChart {
    let misaligned = forecast.misaligned();
    if !misaligned.is_empty() {
        debug!("Forecast series not aligned with dates: {:?}", misaligned);
    }
    let series = forecast
        .dams
        .keys()
        .map(|name| LineSeries {
            name: name.clone(),
            color: dam_color(name),
            points: forecast
                .dates
                .iter()
                .zip(forecast.series(name))
                .map(|(date, value)| DateValue {
                    date: date.clone(),
                    value: *value,
                })
                .collect(),
        })
        .collect();
    LineChart {
        dates: forecast.dates.clone(),
        series,
    }
}

/// One segment per reservoir, sized by capacity.
pub fn capacity_distribution(dams: &[Dam]) -> DonutChart {
    let total: f64 = dams.iter().map(|dam| dam.capacity_m3).sum();
    let segments = dams
        .iter()
        .map(|dam| Segment {
            label: dam.name.clone(),
            value: dam.capacity_m3,
            share_pct: if total > 0.0 {
                dam.capacity_m3 / total * 100.0
            } else {
                0.0
            },
            color: dam_color(&dam.name),
        })
        .collect();
    DonutChart { total, segments }
}

/// One bar per district, in backend order.
pub fn consumption_ranking(consumption: &[ConsumptionData]) -> BarChart {
    BarChart {
        bars: consumption
            .iter()
            .map(|row| Bar {
                label: row.district_name.clone(),
                value: row.avg_daily_m3,
            })
            .collect(),
    }
}

/// The first [`TOP_FEATURES`] features in list order, with underscores
/// shown as spaces.
pub fn feature_importance(metrics: Option<&ModelMetrics>) -> BarChart {
    let features = metrics
        .and_then(|m| m.top_features.as_deref())
        .unwrap_or_default();
    BarChart {
        bars: features
            .iter()
            .take(TOP_FEATURES)
            .map(|f| Bar {
                label: f.feature.replace('_', " "),
                value: f.importance,
            })
            .collect(),
    }
}

pub fn forecast_config(labels: &Dictionary) -> ChartConfig {
    ChartConfig {
        title: labels.charts.forecast_title.to_string(),
        y_axis_label: labels.charts.occupancy_axis.to_string(),
        y_max: Some(100.0),
        reference_lines: vec![
            ReferenceLine {
                label: labels.charts.alert_threshold.to_string(),
                value: ALERT_THRESHOLD_PCT,
            },
            ReferenceLine {
                label: labels.charts.critical_threshold.to_string(),
                value: CRITICAL_THRESHOLD_PCT,
            },
        ],
    }
}

pub fn capacity_config(labels: &Dictionary) -> ChartConfig {
    ChartConfig {
        title: labels.charts.capacity_title.to_string(),
        y_axis_label: labels.dam.capacity.to_string(),
        y_max: None,
        reference_lines: Vec::new(),
    }
}

pub fn consumption_config(labels: &Dictionary) -> ChartConfig {
    ChartConfig {
        title: labels.charts.consumption_title.to_string(),
        y_axis_label: labels.charts.consumption_axis.to_string(),
        y_max: None,
        reference_lines: Vec::new(),
    }
}

pub fn features_config(labels: &Dictionary) -> ChartConfig {
    ChartConfig {
        title: labels.charts.features_title.to_string(),
        y_axis_label: labels.charts.importance_axis.to_string(),
        y_max: None,
        reference_lines: Vec::new(),
    }
}

/// Serialize chart data for the charting surface. Serialization of these
/// types cannot fail, but an empty string is returned rather than panicking.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::{dictionary, Language};
    use iwm_types::metrics::FeatureImportance;
    use iwm_types::status::Status;
    use std::collections::BTreeMap;

    fn dam(name: &str, capacity_m3: f64) -> Dam {
        Dam {
            name: name.to_string(),
            occupancy_pct: 20.0,
            capacity_m3,
            volume_m3: capacity_m3 * 0.2,
            status: Status::Warning,
            connected_districts_count: 3,
            days_to_crisis: 60.0,
        }
    }

    #[test]
    fn test_empty_inputs_give_empty_charts() {
        assert_eq!(forecast_series(&OccupancyForecast::default()), LineChart::default());
        assert_eq!(capacity_distribution(&[]), DonutChart::default());
        assert_eq!(consumption_ranking(&[]), BarChart::default());
        assert_eq!(feature_importance(None), BarChart::default());
        assert_eq!(feature_importance(Some(&ModelMetrics::default())), BarChart::default());
        assert_eq!(to_json(&LineChart::default()), r#"{"dates":[],"series":[]}"#);
    }

    #[test]
    fn test_forecast_series_per_reservoir() {
        let mut dams = BTreeMap::new();
        dams.insert("Omerli".to_string(), vec![13.0, 12.9, 12.8]);
        dams.insert("Elmali".to_string(), vec![50.6, 50.5, 50.4]);
        let forecast = OccupancyForecast {
            dates: vec!["2025-12-08".into(), "2025-12-09".into(), "2025-12-10".into()],
            dams,
        };
        let chart = forecast_series(&forecast);
        assert_eq!(chart.dates.len(), 3);
        assert_eq!(chart.series.len(), 2);
        let omerli = chart.series.iter().find(|s| s.name == "Omerli").unwrap();
        assert_eq!(omerli.color, "#1565C0");
        assert_eq!(omerli.points[2], DateValue { date: "2025-12-10".into(), value: 12.8 });
    }

    #[test]
    fn test_short_series_renders_prefix_only() {
        let mut dams = BTreeMap::new();
        dams.insert("Terkos".to_string(), vec![19.2]);
        dams.insert("Alibey".to_string(), vec![10.1, 10.0, 9.9, 9.8]);
        let forecast = OccupancyForecast {
            dates: vec!["d1".into(), "d2".into(), "d3".into()],
            dams,
        };
        let chart = forecast_series(&forecast);
        let terkos = chart.series.iter().find(|s| s.name == "Terkos").unwrap();
        let alibey = chart.series.iter().find(|s| s.name == "Alibey").unwrap();
        assert_eq!(terkos.points.len(), 1);
        assert_eq!(alibey.points.len(), 3);
    }

    #[test]
    fn test_unknown_reservoir_gets_default_color() {
        assert_eq!(dam_color("Yeni Baraj"), DEFAULT_COLOR);
        let donut = capacity_distribution(&[dam("Yeni Baraj", 10.0)]);
        assert_eq!(donut.segments[0].color, DEFAULT_COLOR);
    }

    #[test]
    fn test_capacity_segments_match_forecast_colors() {
        let donut = capacity_distribution(&[dam("Omerli", 300.0), dam("Darlik", 100.0)]);
        assert_eq!(donut.total, 400.0);
        assert_eq!(donut.segments[0].color, dam_color("Omerli"));
        assert_eq!(donut.segments[0].share_pct, 75.0);
        assert_eq!(donut.segments[1].share_pct, 25.0);
    }

    #[test]
    fn test_zero_capacity_has_zero_share() {
        let donut = capacity_distribution(&[dam("Omerli", 0.0)]);
        assert_eq!(donut.segments[0].share_pct, 0.0);
    }

    #[test]
    fn test_consumption_keeps_backend_order() {
        let rows = vec![
            ConsumptionData {
                district_name: "Esenyurt".into(),
                avg_daily_m3: 150_320.0,
                primary_driver: String::new(),
            },
            ConsumptionData {
                district_name: "Adalar".into(),
                avg_daily_m3: 4_210.0,
                primary_driver: String::new(),
            },
            ConsumptionData {
                district_name: "Kadikoy".into(),
                avg_daily_m3: 98_000.0,
                primary_driver: String::new(),
            },
        ];
        let chart = consumption_ranking(&rows);
        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Esenyurt", "Adalar", "Kadikoy"]);
        assert_eq!(chart.bars[2].value, 98_000.0);
    }

    #[test]
    fn test_feature_importance_takes_first_five_in_order() {
        let top_features = (0..8)
            .map(|i| FeatureImportance {
                feature: format!("lag_{}_consumption", i),
                importance: i as f64 / 10.0,
            })
            .collect();
        let metrics = ModelMetrics {
            top_features: Some(top_features),
            ..Default::default()
        };
        let chart = feature_importance(Some(&metrics));
        assert_eq!(chart.bars.len(), TOP_FEATURES);
        assert_eq!(chart.bars[0].label, "lag 0 consumption");
        assert_eq!(chart.bars[4].value, 0.4);
    }

    #[test]
    fn test_forecast_config_has_threshold_lines() {
        let config = forecast_config(dictionary(Language::En));
        assert_eq!(config.reference_lines.len(), 2);
        assert_eq!(config.reference_lines[0].value, ALERT_THRESHOLD_PCT);
        assert_eq!(config.reference_lines[1].label, "Critical Threshold");
        assert!(to_json(&config).contains("\"yAxisLabel\":\"Occupancy (%)\""));
    }
}
