//! Shared utility functions for IWM crates.

/// Percentage arithmetic and labels
pub mod percent {
    /// Clamp an occupancy percentage to [0, 100]. NaN becomes 0.
    pub fn clamp_pct(value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, 100.0)
    }

    /// Render a number with at most two decimals and at least one,
    /// dropping trailing zeros: 12.50 -> "12.5", 20.0 -> "20.0", 0.84 -> "0.84".
    pub fn trim_decimals(value: f64) -> String {
        let mut text = format!("{:.2}", round_cents(value));
        while text.ends_with('0') && !text.ends_with(".0") {
            text.pop();
        }
        text
    }

    /// Round to two decimals. Anything that rounds to zero, negative zero
    /// included, becomes positive zero.
    fn round_cents(value: f64) -> f64 {
        let rounded = (value * 100.0).round() / 100.0;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Occupancy label, e.g. "57.5%".
    pub fn format_pct(value: f64) -> String {
        format!("{}%", trim_decimals(value))
    }

    /// Signed percentage-point label for retention deltas, e.g. "+12.5%".
    pub fn format_signed_pct(value: f64) -> String {
        let value = round_cents(value);
        if value < 0.0 {
            format!("-{}%", trim_decimals(-value))
        } else {
            format!("+{}%", trim_decimals(value))
        }
    }

}

/// Volume labels
pub mod volume {
    /// Human readable cubic metres: "244.54M m³", "9.6M m³", "412k m³".
    pub fn format_volume_m3(value: f64) -> String {
        let magnitude = value.abs();
        if magnitude >= 1_000_000_000.0 {
            format!("{}B m³", super::percent::trim_decimals(value / 1_000_000_000.0))
        } else if magnitude >= 1_000_000.0 {
            format!("{}M m³", super::percent::trim_decimals(value / 1_000_000.0))
        } else if magnitude >= 1_000.0 {
            format!("{:.0}k m³", value / 1_000.0)
        } else {
            format!("{:.0} m³", value)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_volume_m3() {
            assert_eq!(format_volume_m3(244_540_000.0), "244.54M m³");
            assert_eq!(format_volume_m3(9_600_000.0), "9.6M m³");
            assert_eq!(format_volume_m3(412_300.0), "412k m³");
            assert_eq!(format_volume_m3(870.0), "870 m³");
            assert_eq!(format_volume_m3(1_460_000_000.0), "1.46B m³");
        }
    }
}

/// Runtime configuration constants
pub mod config {
    use std::time::Duration;

    /// Environment variable holding the backend base address.
    pub const API_URL_ENV: &str = "IWM_API_URL";

    /// Backend base address used when nothing is configured.
    pub const DEFAULT_API_URL: &str = "http://localhost:8000";

    /// Period of the snapshot refresh.
    pub const REFRESH_PERIOD: Duration = Duration::from_secs(30);
}
