use crate::status::Priority;
use serde::{Deserialize, Serialize};

/// A candidate mitigation action for one reservoir.
///
/// `action` is a stable code (`GROUNDWATER_SUPPLEMENT`, `PLANNED_CUTS_8H`);
/// `title` and `sub_title` are backend-authored display phrases in the
/// base language.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sub_title: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub reason: String,
    pub details: RecommendationDetails,
}

impl Recommendation {
    /// Phrase to show for this action: the title when the backend sent one,
    /// otherwise the action code.
    pub fn display_phrase(&self) -> &str {
        match &self.title {
            Some(title) if !title.is_empty() => title,
            _ => &self.action,
        }
    }
}

/// Backend estimate of what the action buys over the 30-day horizon.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationDetails {
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub days_gained: f64,
    /// Occupancy retained after 30 days, in percentage points. Added to the
    /// current occupancy, never multiplied.
    #[serde(default)]
    pub retention_30d: f64,
    #[serde(default)]
    pub vol_saved_m3: f64,
    #[serde(default)]
    pub risk_label: Option<String>,
    #[serde(default)]
    pub support_label: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_backend_recommendation() {
        let body = r#"{
            "action": "PLANNED_CUTS_8H",
            "title": "KISMI SU KESİNTİSİ",
            "sub_title": "Uyarı Seviyesi Önlemi",
            "priority": "HIGH",
            "details": {
                "duration": "Her Gün (8 Saat)",
                "days_gained": 15.9,
                "retention_30d": 2.35,
                "vol_saved_m3": 2406000,
                "risk_label": "⚠️ Orta Tepki Riski"
            }
        }"#;
        let rec: Recommendation = serde_json::from_str(body).unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.details.retention_30d, 2.35);
        assert_eq!(rec.details.scope, None);
        assert_eq!(rec.reason, "");
        assert_eq!(rec.display_phrase(), "KISMI SU KESİNTİSİ");
    }

    #[test]
    fn test_display_phrase_falls_back_to_action() {
        let rec = Recommendation {
            action: "LEAK_REPAIR".to_string(),
            title: None,
            sub_title: None,
            priority: Priority::Medium,
            reason: String::new(),
            details: RecommendationDetails::default(),
        };
        assert_eq!(rec.display_phrase(), "LEAK_REPAIR");
    }
}
