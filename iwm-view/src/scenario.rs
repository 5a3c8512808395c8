//! Scenario projection: what a reservoir looks like after 30 days of a
//! recommended action.

use iwm_types::dam::DamDetail;
use iwm_types::recommendation::Recommendation;
use iwm_utils::percent::{clamp_pct, format_pct, format_signed_pct};
use iwm_utils::volume::format_volume_m3;
use serde::Serialize;

/// Projected occupancy after applying `recommendation` to `baseline_pct`.
///
/// Retention is in percentage points and is added to the baseline; the
/// result is clamped to [0, 100].
pub fn project(baseline_pct: f64, recommendation: &Recommendation) -> f64 {
    clamp_pct(baseline_pct + recommendation.details.retention_30d)
}

/// Volume in cubic metres at `occupancy_pct` of `capacity_m3`.
pub fn projected_volume(capacity_m3: f64, occupancy_pct: f64) -> f64 {
    capacity_m3 * occupancy_pct / 100.0
}

/// Outcome of one scenario, ready for display.
///
/// Always computed from the reservoir's reported occupancy, never from a
/// previous projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub baseline_pct: f64,
    pub projected_pct: f64,
    pub projected_volume_m3: f64,
    /// Backend value, shown verbatim.
    pub retention_pct_points: f64,
    /// Backend value, shown verbatim.
    pub vol_saved_m3: f64,
    pub days_gained: f64,
}

impl Projection {
    pub fn compute(detail: &DamDetail, recommendation: &Recommendation) -> Self {
        let projected_pct = project(detail.occupancy_pct, recommendation);
        Self {
            baseline_pct: detail.occupancy_pct,
            projected_pct,
            projected_volume_m3: projected_volume(detail.capacity_m3, projected_pct),
            retention_pct_points: recommendation.details.retention_30d,
            vol_saved_m3: recommendation.details.vol_saved_m3,
            days_gained: recommendation.details.days_gained,
        }
    }

    pub fn projected_label(&self) -> String {
        format_pct(self.projected_pct)
    }

    pub fn projected_volume_label(&self) -> String {
        format_volume_m3(self.projected_volume_m3)
    }

    pub fn net_retention_label(&self) -> String {
        format_signed_pct(self.retention_pct_points)
    }

    pub fn volume_saved_label(&self) -> String {
        format_volume_m3(self.vol_saved_m3)
    }
}

/// Display strings for an optional projection. With nothing selected every
/// field is the placeholder, so an empty scenario never reads as 0%.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionLabels {
    pub projected: String,
    pub projected_volume: String,
    pub net_retention: String,
    pub volume_saved: String,
}

impl ProjectionLabels {
    pub fn new(projection: Option<&Projection>, placeholder: &str) -> Self {
        match projection {
            Some(p) => Self {
                projected: p.projected_label(),
                projected_volume: p.projected_volume_label(),
                net_retention: p.net_retention_label(),
                volume_saved: p.volume_saved_label(),
            },
            None => Self {
                projected: placeholder.to_string(),
                projected_volume: placeholder.to_string(),
                net_retention: placeholder.to_string(),
                volume_saved: placeholder.to_string(),
            },
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use iwm_types::recommendation::RecommendationDetails;
    use iwm_types::status::{Priority, Status};

    pub(crate) fn recommendation(action: &str, retention_30d: f64) -> Recommendation {
        Recommendation {
            action: action.to_string(),
            title: None,
            sub_title: None,
            priority: Priority::High,
            reason: String::new(),
            details: RecommendationDetails {
                duration: "Sürekli".to_string(),
                days_gained: 12.0,
                retention_30d,
                vol_saved_m3: 1_250_000.0,
                ..Default::default()
            },
        }
    }

    pub(crate) fn detail(name: &str, occupancy_pct: f64, recommendations: Vec<Recommendation>) -> DamDetail {
        DamDetail {
            name: name.to_string(),
            occupancy_pct,
            capacity_m3: 100_000_000.0,
            volume_m3: occupancy_pct * 1_000_000.0,
            status: Status::Caution,
            days_to_crisis: 90.0,
            connected_districts: Vec::new(),
            connected_districts_count: 0,
            recommendations,
        }
    }

    #[test]
    fn test_project_adds_retention_points() {
        let projection = Projection::compute(&detail("Omerli", 45.0, vec![]), &recommendation("A", 12.5));
        assert_eq!(projection.projected_pct, 57.5);
        assert_eq!(projection.net_retention_label(), "+12.5%");
        assert_eq!(projection.projected_label(), "57.5%");
        assert_eq!(projection.projected_volume_m3, 57_500_000.0);
    }

    #[test]
    fn test_project_clamps_at_full() {
        assert_eq!(project(95.0, &recommendation("A", 20.0)), 100.0);
    }

    #[test]
    fn test_project_stays_in_range() {
        for baseline in [0.0, 0.5, 17.12, 50.0, 99.9, 100.0] {
            for retention in [0.0, 0.01, 2.35, 12.5, 60.0, 250.0] {
                let projected = project(baseline, &recommendation("A", retention));
                assert_eq!(projected, (baseline + retention).min(100.0));
                assert!((0.0..=100.0).contains(&projected));
            }
        }
    }

    #[test]
    fn test_projections_do_not_compound() {
        let dam = detail("Omerli", 45.0, vec![]);
        let rec_a = recommendation("A", 12.5);
        let rec_b = recommendation("B", 3.0);
        let _first = Projection::compute(&dam, &rec_a);
        let second = Projection::compute(&dam, &rec_b);
        assert_eq!(second.projected_pct, project(45.0, &rec_b));
        assert_eq!(second.projected_pct, 48.0);
    }

    #[test]
    fn test_verbatim_backend_values() {
        let projection = Projection::compute(&detail("Darlik", 27.65, vec![]), &recommendation("A", 2.35));
        assert_eq!(projection.retention_pct_points, 2.35);
        assert_eq!(projection.vol_saved_m3, 1_250_000.0);
        assert_eq!(projection.volume_saved_label(), "1.25M m³");
    }

    #[test]
    fn test_placeholder_without_projection() {
        let labels = ProjectionLabels::new(None, "—");
        assert_eq!(labels.projected, "—");
        assert_eq!(labels.net_retention, "—");
        assert_ne!(labels.projected, "0.0%");
    }

    #[test]
    fn test_projected_volume() {
        assert_eq!(projected_volume(244_540_000.0, 50.0), 122_270_000.0);
        assert_eq!(projected_volume(0.0, 80.0), 0.0);
    }
}
