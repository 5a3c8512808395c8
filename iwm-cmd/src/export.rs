//! Chart series export as JSON (for a charting surface) or CSV.

use clap::ValueEnum;
use csv::Writer;
use iwm_view::chart;
use iwm_view::state::Dashboard;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Occupancy forecast, one line per reservoir
    Forecast,
    /// Capacity share per reservoir
    Capacity,
    /// Average daily consumption per district
    Consumption,
    /// Model feature importance
    Features,
}

/// Chart config and series as one pretty-printed JSON document.
pub fn chart_json(kind: ChartKind, dashboard: &Dashboard) -> anyhow::Result<String> {
    let labels = dashboard.localizer.labels();
    let snapshot = &dashboard.snapshot;
    let document = match kind {
        ChartKind::Forecast => json!({
            "config": chart::forecast_config(labels),
            "data": chart::forecast_series(&snapshot.forecast),
        }),
        ChartKind::Capacity => json!({
            "config": chart::capacity_config(labels),
            "data": chart::capacity_distribution(&snapshot.dams),
        }),
        ChartKind::Consumption => json!({
            "config": chart::consumption_config(labels),
            "data": chart::consumption_ranking(&snapshot.consumption),
        }),
        ChartKind::Features => json!({
            "config": chart::features_config(labels),
            "data": chart::feature_importance(snapshot.metrics.as_ref()),
        }),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Chart series as CSV with a header row. Forecast rows are long-form
/// (one row per reservoir and date).
pub fn chart_csv(kind: ChartKind, dashboard: &Dashboard) -> anyhow::Result<String> {
    let snapshot = &dashboard.snapshot;
    let mut writer = Writer::from_writer(vec![]);
    match kind {
        ChartKind::Forecast => {
            writer.write_record(["dam", "date", "occupancy_pct"])?;
            for series in chart::forecast_series(&snapshot.forecast).series {
                for point in &series.points {
                    writer.write_record([
                        series.name.as_str(),
                        point.date.as_str(),
                        point.value.to_string().as_str(),
                    ])?;
                }
            }
        }
        ChartKind::Capacity => {
            writer.write_record(["dam", "capacity_m3", "share_pct"])?;
            for segment in chart::capacity_distribution(&snapshot.dams).segments {
                writer.write_record([
                    segment.label.as_str(),
                    segment.value.to_string().as_str(),
                    format!("{:.2}", segment.share_pct).as_str(),
                ])?;
            }
        }
        ChartKind::Consumption => {
            writer.write_record(["district", "avg_daily_m3"])?;
            for bar in chart::consumption_ranking(&snapshot.consumption).bars {
                writer.write_record([bar.label.as_str(), bar.value.to_string().as_str()])?;
            }
        }
        ChartKind::Features => {
            writer.write_record(["feature", "importance"])?;
            for bar in chart::feature_importance(snapshot.metrics.as_ref()).bars {
                writer.write_record([bar.label.as_str(), bar.value.to_string().as_str()])?;
            }
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("could not flush CSV: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}
