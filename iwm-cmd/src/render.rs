//! Plain-text rendering of the dashboard state.

use iwm_types::metrics::ModelMetrics;
use iwm_utils::percent::format_pct;
use iwm_utils::volume::format_volume_m3;
use iwm_view::chart::feature_importance;
use iwm_view::localization::Dictionary;
use iwm_view::state::Dashboard;
use iwm_view::view_state::Page;

/// Page list with the active page bracketed.
pub fn navigation(dashboard: &Dashboard) -> String {
    let labels = dashboard.localizer.labels();
    let active = dashboard.view.page();
    Page::ALL
        .iter()
        .map(|&page| {
            if page == active {
                format!("[{}]", labels.page(page))
            } else {
                labels.page(page).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Reservoir and district tables, model metrics, the system average and
/// sync health.
pub fn dashboard_summary(dashboard: &Dashboard) -> String {
    let labels = dashboard.localizer.labels();
    let snapshot = &dashboard.snapshot;
    let mut lines = vec![labels.common.app_title.to_string(), navigation(dashboard)];

    if dashboard.loading {
        lines.push(labels.common.loading.to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "{}: {}",
        labels.common.system_average,
        snapshot
            .general_occupancy_pct
            .map(format_pct)
            .unwrap_or_else(|| labels.common.no_data.to_string())
    ));

    lines.push(String::new());
    lines.push(format!(
        "{:<14} {:>8} {:<10} {:>14} {:>8}",
        labels.dam.title, labels.dam.occupancy, labels.dam.status, labels.dam.volume, labels.dam.days_to_crisis
    ));
    if snapshot.dams.is_empty() {
        lines.push(labels.common.no_data.to_string());
    }
    for dam in &snapshot.dams {
        lines.push(format!(
            "{:<14} {:>8} {:<10} {:>14} {:>8.0}",
            dam.name,
            format_pct(dam.occupancy_pct),
            labels.status(dam.status),
            format_volume_m3(dam.volume_m3),
            dam.days_to_crisis
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{:<14} {:<10} {:>8} {:>14}  {:<20} {}",
        labels.district.title,
        labels.dam.status,
        labels.district.days_supply,
        labels.district.daily_consumption,
        labels.district.primary_driver,
        labels.district.source_dams
    ));
    if snapshot.districts.is_empty() {
        lines.push(labels.common.no_data.to_string());
    }
    for district in &snapshot.districts {
        // Source reservoirs with their current occupancy when the list has them.
        let sources: Vec<String> = district
            .source_dams
            .iter()
            .map(|source| match snapshot.dam(&source.name) {
                Some(dam) => format!("{} {}", dam.name, format_pct(dam.occupancy_pct)),
                None => source.name.clone(),
            })
            .collect();
        lines.push(format!(
            "{:<14} {:<10} {:>8.0} {:>14}  {:<20} {}",
            district.name,
            labels.status(district.status),
            district.days_supply,
            format_volume_m3(district.daily_cons),
            dashboard.localizer.phrase(&district.primary_driver),
            sources.join(", ")
        ));
    }

    if let Some(metrics) = &snapshot.metrics {
        lines.push(String::new());
        lines.extend(metrics_summary(labels, metrics));
    }

    lines.push(String::new());
    lines.push(match dashboard.health.last_success {
        Some(at) => format!("{}: {}", labels.common.last_updated, at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => labels.common.never_updated.to_string(),
    });
    if dashboard.health.is_stale() {
        if let Some(error) = &dashboard.health.last_error {
            lines.push(format!("{} ({})", labels.common.stale_data, error));
        }
    }
    lines.join("\n")
}

/// Training metrics of the consumption model. Optional fields are left out
/// when the backend did not send them.
pub fn metrics_summary(labels: &Dictionary, metrics: &ModelMetrics) -> Vec<String> {
    let m = &labels.metrics;
    let cv = &metrics.cross_validation;
    let mut lines = vec![
        m.title.to_string(),
        format!("  {}: {}", m.model_type, metrics.model_type),
        format!("  {}: {}", m.training_date, metrics.training_date),
    ];

    let counts: Vec<String> = [
        (m.data_points, metrics.data_points),
        (m.features_count, metrics.features_count.map(u64::from)),
        (m.districts, metrics.districts.map(u64::from)),
    ]
    .into_iter()
    .filter_map(|(label, count)| count.map(|n| format!("{}: {}", label, n)))
    .collect();
    if !counts.is_empty() {
        lines.push(format!("  {}", counts.join("  ")));
    }
    if let (Some(first), Some(last)) = (metrics.years.first(), metrics.years.last()) {
        lines.push(format!("  {}: {}-{}", m.years, first, last));
    }

    if let Some(splits) = cv.splits {
        let split_type = cv.split_type.as_deref().map(|t| format!(" ({})", t)).unwrap_or_default();
        lines.push(format!("  {}: {} {}{}", m.cross_validation, splits, m.splits, split_type));
    }
    let mut validation = format!(
        "  {}: {:.3}  {}: {:.1}  {}: {:.1}",
        m.r2, cv.val_r2, m.mae, cv.val_mae, m.rmse, cv.val_rmse
    );
    if let Some(mape) = cv.val_mape {
        validation.push_str(&format!("  {}: {}", m.mape, format_pct(mape)));
    }
    lines.push(validation);

    let fit: Vec<String> = [("R²", cv.train_r2, 3usize), ("MAE", cv.train_mae, 1), ("RMSE", cv.train_rmse, 1)]
        .into_iter()
        .filter_map(|(name, value, precision)| value.map(|v| format!("{} {:.*}", name, precision, v)))
        .collect();
    if !fit.is_empty() {
        lines.push(format!("  {}: {}", m.training_fit, fit.join(", ")));
    }

    let top: Vec<String> = feature_importance(Some(metrics))
        .bars
        .into_iter()
        .map(|bar| bar.label)
        .collect();
    if !top.is_empty() {
        lines.push(format!("  {}: {}", m.top_features, top.join(", ")));
    }
    lines
}

/// The open reservoir detail, its active scenario and the candidate actions
/// with the active one marked.
pub fn inspection_summary(dashboard: &Dashboard) -> String {
    let labels = dashboard.localizer.labels();
    let Some(detail) = dashboard.view.detail() else {
        return labels.common.no_data.to_string();
    };
    let mut lines = vec![
        format!("{}: {} ({})", labels.dam.title, detail.name, labels.status(detail.status)),
        format!(
            "{}: {}  {}: {}  {}: {}",
            labels.dam.occupancy,
            format_pct(detail.occupancy_pct),
            labels.dam.capacity,
            format_volume_m3(detail.capacity_m3),
            labels.dam.volume,
            format_volume_m3(detail.volume_m3)
        ),
        format!("{}: {:.1}", labels.dam.days_to_crisis, detail.days_to_crisis),
    ];
    if !detail.connected_districts.is_empty() {
        // Prefer the district's live status from the snapshot.
        let names: Vec<String> = detail
            .connected_districts
            .iter()
            .map(|reference| {
                let status = dashboard
                    .snapshot
                    .district(&reference.name)
                    .map_or(reference.status, |district| district.status);
                format!("{} ({})", reference.name, labels.status(status))
            })
            .collect();
        lines.push(format!("{}: {}", labels.dam.connected_districts, names.join(", ")));
    }

    let projection = dashboard.projection_labels();
    lines.push(String::new());
    lines.push(labels.scenario.title.to_string());
    lines.push(format!("  {}: {}", labels.scenario.current_occupancy, format_pct(detail.occupancy_pct)));
    lines.push(format!("  {}: {}", labels.scenario.projected_occupancy, projection.projected));
    lines.push(format!("  {}: {}", labels.scenario.projected_volume, projection.projected_volume));
    lines.push(format!("  {}: {}", labels.scenario.net_retention, projection.net_retention));
    lines.push(format!("  {}: {}", labels.scenario.volume_saved, projection.volume_saved));

    lines.push(String::new());
    if detail.recommendations.is_empty() {
        lines.push(labels.scenario.no_recommendations.to_string());
        return lines.join("\n");
    }
    lines.push(labels.scenario.actions.to_string());
    let selected = dashboard.view.selection_index();
    let localizer = &dashboard.localizer;
    for (index, recommendation) in detail.recommendations.iter().enumerate() {
        let marker = if selected == Some(index) { '*' } else { ' ' };
        let details = &recommendation.details;
        let mut heading = format!("{} [{}] {}", marker, index, localizer.action(recommendation));
        if let Some(sub_title) = recommendation.sub_title.as_deref().filter(|t| !t.is_empty()) {
            heading.push_str(&format!(" / {}", localizer.phrase(sub_title)));
        }
        heading.push_str(&format!(" ({})", labels.priority(recommendation.priority)));
        lines.push(heading);
        lines.push(format!(
            "      {}: {}  {}: {:.1}  {}: {}",
            labels.scenario.duration,
            localizer.phrase(&details.duration),
            labels.scenario.days_gained,
            details.days_gained,
            labels.scenario.volume_saved,
            format_volume_m3(details.vol_saved_m3)
        ));
        if let Some(scope) = details.scope.as_deref() {
            lines.push(format!("      {}: {}", labels.scenario.scope, localizer.phrase(scope)));
        }
        if let Some(support) = details.support_label.as_deref() {
            lines.push(format!("      {}: {}", labels.scenario.support, localizer.phrase(support)));
        }
        if let Some(risk) = details.risk_label.as_deref() {
            lines.push(format!("      {}", localizer.phrase(risk)));
        }
        if !recommendation.reason.is_empty() {
            lines.push(format!(
                "      {}: {}",
                labels.scenario.reason,
                localizer.phrase(&recommendation.reason)
            ));
        }
    }
    lines.join("\n")
}
