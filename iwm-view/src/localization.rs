//! Bilingual display text.
//!
//! UI labels come from [`Dictionary`], one static value per language. Both
//! values share the same struct type, so a label missing from one language
//! does not compile. Backend-authored phrases go through the flat table in
//! [`crate::phrases`] and fall back to the source phrase when untranslated.

use crate::phrases;
use crate::view_state::Page;
use iwm_types::recommendation::Recommendation;
use iwm_types::status::{Priority, Status};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display languages. Turkish is the base language: backend
/// phrases are authored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
}

impl Language {
    pub const BASE: Language = Language::Tr;
    pub const ALL: [Language; 2] = [Language::Tr, Language::En];

    /// Parse a language tag such as `tr`, `en`, `en-US` or `tr_TR`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        match primary.as_str() {
            "tr" => Some(Language::Tr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| format!("unsupported language tag '{}' (use tr or en)", s))
    }
}

#[derive(Debug, Serialize)]
pub struct NavLabels {
    pub dashboard: &'static str,
    pub predictions: &'static str,
    pub districts: &'static str,
    pub docs: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CommonLabels {
    pub app_title: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub last_updated: &'static str,
    pub never_updated: &'static str,
    pub stale_data: &'static str,
    pub system_average: &'static str,
    pub close: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusLabels {
    pub critical: &'static str,
    pub warning: &'static str,
    pub caution: &'static str,
    pub safe: &'static str,
    pub unknown: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PriorityLabels {
    pub critical: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
    pub unknown: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DamLabels {
    pub title: &'static str,
    pub occupancy: &'static str,
    pub capacity: &'static str,
    pub volume: &'static str,
    pub status: &'static str,
    pub days_to_crisis: &'static str,
    pub connected_districts: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DistrictLabels {
    pub title: &'static str,
    pub days_supply: &'static str,
    pub daily_consumption: &'static str,
    pub primary_driver: &'static str,
    pub source_dams: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ScenarioLabels {
    pub title: &'static str,
    pub actions: &'static str,
    pub current_occupancy: &'static str,
    pub projected_occupancy: &'static str,
    pub projected_volume: &'static str,
    pub net_retention: &'static str,
    pub volume_saved: &'static str,
    pub days_gained: &'static str,
    pub duration: &'static str,
    pub scope: &'static str,
    pub support: &'static str,
    pub reason: &'static str,
    pub priority: &'static str,
    pub no_selection: &'static str,
    pub no_recommendations: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChartLabels {
    pub forecast_title: &'static str,
    pub capacity_title: &'static str,
    pub consumption_title: &'static str,
    pub features_title: &'static str,
    pub occupancy_axis: &'static str,
    pub consumption_axis: &'static str,
    pub importance_axis: &'static str,
    pub alert_threshold: &'static str,
    pub critical_threshold: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MetricsLabels {
    pub title: &'static str,
    pub model_type: &'static str,
    pub training_date: &'static str,
    pub r2: &'static str,
    pub mae: &'static str,
    pub rmse: &'static str,
    pub mape: &'static str,
    pub training_fit: &'static str,
    pub cross_validation: &'static str,
    pub splits: &'static str,
    pub data_points: &'static str,
    pub features_count: &'static str,
    pub districts: &'static str,
    pub years: &'static str,
    pub top_features: &'static str,
}

/// Every UI label, grouped by screen area.
#[derive(Debug, Serialize)]
pub struct Dictionary {
    pub nav: NavLabels,
    pub common: CommonLabels,
    pub status: StatusLabels,
    pub priority: PriorityLabels,
    pub dam: DamLabels,
    pub district: DistrictLabels,
    pub scenario: ScenarioLabels,
    pub charts: ChartLabels,
    pub metrics: MetricsLabels,
}

static TR: Dictionary = Dictionary {
    nav: NavLabels {
        dashboard: "Genel Bakış",
        predictions: "Tahminler",
        districts: "İlçeler",
        docs: "Dokümantasyon",
    },
    common: CommonLabels {
        app_title: "İstanbul Su Yönetimi",
        loading: "Veriler yükleniyor...",
        no_data: "Veri yok",
        last_updated: "Son güncelleme",
        never_updated: "Henüz güncellenmedi",
        stale_data: "Veriler güncel olmayabilir",
        system_average: "Sistem Ortalaması",
        close: "Kapat",
    },
    status: StatusLabels {
        critical: "KRİTİK",
        warning: "UYARI",
        caution: "DİKKAT",
        safe: "GÜVENLİ",
        unknown: "BİLİNMİYOR",
    },
    priority: PriorityLabels {
        critical: "Kritik",
        high: "Yüksek",
        medium: "Orta",
        low: "Düşük",
        unknown: "Belirsiz",
    },
    dam: DamLabels {
        title: "Barajlar",
        occupancy: "Doluluk",
        capacity: "Kapasite",
        volume: "Hacim",
        status: "Durum",
        days_to_crisis: "Krize Kalan Gün",
        connected_districts: "Bağlı İlçeler",
    },
    district: DistrictLabels {
        title: "İlçeler",
        days_supply: "Yeterlilik (Gün)",
        daily_consumption: "Günlük Tüketim",
        primary_driver: "Ana Tüketim Etkeni",
        source_dams: "Kaynak Barajlar",
    },
    scenario: ScenarioLabels {
        title: "Senaryo Analizi",
        actions: "Önerilen Aksiyonlar",
        current_occupancy: "Mevcut Doluluk",
        projected_occupancy: "Öngörülen Doluluk (30 Gün)",
        projected_volume: "Öngörülen Hacim",
        net_retention: "Net Kazanım",
        volume_saved: "Tasarruf Edilen Hacim",
        days_gained: "Kazanılan Gün",
        duration: "Süre",
        scope: "Kapsam",
        support: "Takviye",
        reason: "Gerekçe",
        priority: "Öncelik",
        no_selection: "—",
        no_recommendations: "Bu baraj için öneri yok",
    },
    charts: ChartLabels {
        forecast_title: "30 Günlük Doluluk Tahmini",
        capacity_title: "Kapasite Dağılımı",
        consumption_title: "İlçe Tüketim Sıralaması",
        features_title: "Model Özellik Önemi",
        occupancy_axis: "Doluluk (%)",
        consumption_axis: "Ortalama Günlük Tüketim (m³)",
        importance_axis: "Önem",
        alert_threshold: "Uyarı Eşiği",
        critical_threshold: "Kritik Eşik",
    },
    metrics: MetricsLabels {
        title: "Model Performansı",
        model_type: "Model Tipi",
        training_date: "Eğitim Tarihi",
        r2: "Doğrulama R²",
        mae: "Doğrulama MAE",
        rmse: "Doğrulama RMSE",
        mape: "Doğrulama MAPE",
        training_fit: "Eğitim Uyumu",
        cross_validation: "Çapraz Doğrulama",
        splits: "bölüm",
        data_points: "Veri Noktası",
        features_count: "Özellik Sayısı",
        districts: "İlçe Sayısı",
        years: "Yıllar",
        top_features: "En Önemli Özellikler",
    },
};

static EN: Dictionary = Dictionary {
    nav: NavLabels {
        dashboard: "Overview",
        predictions: "Predictions",
        districts: "Districts",
        docs: "Documentation",
    },
    common: CommonLabels {
        app_title: "Istanbul Water Management",
        loading: "Loading data...",
        no_data: "No data",
        last_updated: "Last updated",
        never_updated: "Not updated yet",
        stale_data: "Data may be out of date",
        system_average: "System Average",
        close: "Close",
    },
    status: StatusLabels {
        critical: "CRITICAL",
        warning: "WARNING",
        caution: "CAUTION",
        safe: "SAFE",
        unknown: "UNKNOWN",
    },
    priority: PriorityLabels {
        critical: "Critical",
        high: "High",
        medium: "Medium",
        low: "Low",
        unknown: "Unspecified",
    },
    dam: DamLabels {
        title: "Reservoirs",
        occupancy: "Occupancy",
        capacity: "Capacity",
        volume: "Volume",
        status: "Status",
        days_to_crisis: "Days to Crisis",
        connected_districts: "Connected Districts",
    },
    district: DistrictLabels {
        title: "Districts",
        days_supply: "Supply (Days)",
        daily_consumption: "Daily Consumption",
        primary_driver: "Primary Driver",
        source_dams: "Source Reservoirs",
    },
    scenario: ScenarioLabels {
        title: "Scenario Analysis",
        actions: "Recommended Actions",
        current_occupancy: "Current Occupancy",
        projected_occupancy: "Projected Occupancy (30 Days)",
        projected_volume: "Projected Volume",
        net_retention: "Net Retention",
        volume_saved: "Volume Saved",
        days_gained: "Days Gained",
        duration: "Duration",
        scope: "Scope",
        support: "Supply Support",
        reason: "Reason",
        priority: "Priority",
        no_selection: "—",
        no_recommendations: "No recommendations for this reservoir",
    },
    charts: ChartLabels {
        forecast_title: "30-Day Occupancy Forecast",
        capacity_title: "Capacity Distribution",
        consumption_title: "District Consumption Ranking",
        features_title: "Model Feature Importance",
        occupancy_axis: "Occupancy (%)",
        consumption_axis: "Average Daily Consumption (m³)",
        importance_axis: "Importance",
        alert_threshold: "Alert Threshold",
        critical_threshold: "Critical Threshold",
    },
    metrics: MetricsLabels {
        title: "Model Performance",
        model_type: "Model Type",
        training_date: "Training Date",
        r2: "Validation R²",
        mae: "Validation MAE",
        rmse: "Validation RMSE",
        mape: "Validation MAPE",
        training_fit: "Training Fit",
        cross_validation: "Cross-Validation",
        splits: "splits",
        data_points: "Data Points",
        features_count: "Features",
        districts: "Districts",
        years: "Years",
        top_features: "Top Features",
    },
};

/// The label dictionary for `language`.
pub fn dictionary(language: Language) -> &'static Dictionary {
    match language {
        Language::Tr => &TR,
        Language::En => &EN,
    }
}

impl Dictionary {
    pub fn status(&self, status: Status) -> &'static str {
        match status {
            Status::Critical => self.status.critical,
            Status::Warning => self.status.warning,
            Status::Caution => self.status.caution,
            Status::Safe => self.status.safe,
            Status::Unknown => self.status.unknown,
        }
    }

    pub fn priority(&self, priority: Priority) -> &'static str {
        match priority {
            Priority::Critical => self.priority.critical,
            Priority::High => self.priority.high,
            Priority::Medium => self.priority.medium,
            Priority::Low => self.priority.low,
            Priority::Unknown => self.priority.unknown,
        }
    }

    pub fn page(&self, page: Page) -> &'static str {
        match page {
            Page::Dashboard => self.nav.dashboard,
            Page::Predictions => self.nav.predictions,
            Page::Districts => self.nav.districts,
            Page::Docs => self.nav.docs,
        }
    }

    /// Dotted paths of every label, e.g. `scenario.net_retention`.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if let Ok(value) = serde_json::to_value(self) {
            collect_leaf_keys(&value, "", &mut keys);
        }
        keys.sort();
        keys
    }

    /// Label at a dotted path, for rendering layers that address labels by key.
    pub fn lookup(&self, path: &str) -> Option<String> {
        let value = serde_json::to_value(self).ok()?;
        path.split('.')
            .try_fold(&value, |node, key| node.get(key))
            .and_then(|leaf| leaf.as_str())
            .map(str::to_string)
    }
}

fn collect_leaf_keys(value: &serde_json::Value, prefix: &str, keys: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                collect_leaf_keys(child, &path, keys);
            }
        }
        _ => keys.push(prefix.to_string()),
    }
}

/// Translate a backend-authored phrase. Returns the phrase itself for the
/// base language or when the table has no entry for it.
pub fn resolve_phrase(phrase: &str, language: Language) -> &str {
    match language {
        Language::Tr => phrase,
        Language::En => phrases::english().get(phrase).copied().unwrap_or(phrase),
    }
}

/// Resolves display text for the active language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn labels(&self) -> &'static Dictionary {
        dictionary(self.language)
    }

    pub fn phrase<'a>(&self, phrase: &'a str) -> &'a str {
        resolve_phrase(phrase, self.language)
    }

    /// Display name of a recommendation in the active language.
    pub fn action<'a>(&self, recommendation: &'a Recommendation) -> &'a str {
        self.phrase(recommendation.display_phrase())
    }
}
