//! Translations of backend-authored phrases.
//!
//! The backend writes action titles, subtitles, durations and risk labels
//! in Turkish. This table maps each exact source phrase to its
//! English rendering. It is data only: new phrases are added here, never
//! as branches in code.

use std::collections::HashMap;
use std::sync::OnceLock;

pub static PHRASES_EN: &[(&str, &str)] = &[
    // Action codes
    ("GROUNDWATER_SUPPLEMENT", "Groundwater Supplement"),
    ("PLANNED_CUTS_12H", "Planned Cuts (12h)"),
    ("PLANNED_CUTS_8H", "Planned Cuts (8h)"),
    ("PRESSURE_REDUCTION_HIGH", "High Pressure Reduction"),
    ("PRESSURE_REDUCTION_LOW", "Light Pressure Reduction"),
    // Action titles
    ("YERALTI SUYU TAKVİYESİ", "GROUNDWATER SUPPLEMENT"),
    ("ZORUNLU SU KESİNTİSİ", "MANDATORY WATER CUTS"),
    ("KISMI SU KESİNTİSİ", "PARTIAL WATER CUTS"),
    ("YÜKSEK BASINÇ KISITLAMASI", "HIGH PRESSURE RESTRICTION"),
    ("HAFİF BASINÇ KISITLAMASI", "LIGHT PRESSURE RESTRICTION"),
    // Action subtitles
    ("Arz Takviyesi", "Supply Supplement"),
    ("Kritik Seviye Önlemi", "Critical Level Measure"),
    ("Uyarı Seviyesi Önlemi", "Warning Level Measure"),
    ("Fiziksel Kısıtlama (-1.0 Bar)", "Physical Restriction (-1.0 Bar)"),
    ("Fiziksel Kısıtlama (-0.5 Bar)", "Physical Restriction (-0.5 Bar)"),
    // Durations
    ("Sürekli (7/24)", "Continuous (24/7)"),
    ("Sürekli", "Continuous"),
    ("Her Gün (12 Saat)", "Daily (12 Hours)"),
    ("Her Gün (8 Saat)", "Daily (8 Hours)"),
    ("Gece (00:00 - 06:00)", "Night (00:00 - 06:00)"),
    // Risk labels
    ("⚠️ Çok Yüksek Tepki Riski", "⚠️ Very High Public Reaction Risk"),
    ("⚠️ Yüksek İrtifa Riski", "⚠️ High-Altitude Supply Risk"),
    ("⚠️ Orta Tepki Riski", "⚠️ Moderate Public Reaction Risk"),
];

/// Lookup map for the English phrase table, built on first use.
pub fn english() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| PHRASES_EN.iter().copied().collect())
}
