//! Utilization status bands for subnet badges.

use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::fmt;

pub const CRITICAL_THRESHOLD: f64 = 90.0;
pub const WARNING_THRESHOLD: f64 = 75.0;
pub const MODERATE_THRESHOLD: f64 = 50.0;

/// Utilization band, ordered from least to most allocated.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusBand {
    Healthy,
    Moderate,
    Warning,
    Critical,
}

impl StatusBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusBand::Healthy => "healthy",
            StatusBand::Moderate => "moderate",
            StatusBand::Warning => "warning",
            StatusBand::Critical => "critical",
        }
    }

    /// The band name colored for terminal output.
    pub fn colored(&self) -> ColoredString {
        match self {
            StatusBand::Healthy => self.as_str().green(),
            StatusBand::Moderate => self.as_str().cyan(),
            StatusBand::Warning => self.as_str().yellow(),
            StatusBand::Critical => self.as_str().on_red(),
        }
    }
}

impl fmt::Display for StatusBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a utilization percentage to its band.
///
/// Thresholds are inclusive lower bounds: 90 and up is critical, 75 warning,
/// 50 moderate, anything else (NaN included) healthy.
pub fn get_utilization_color(percentage: f64) -> StatusBand {
    if percentage >= CRITICAL_THRESHOLD {
        StatusBand::Critical
    } else if percentage >= WARNING_THRESHOLD {
        StatusBand::Warning
    } else if percentage >= MODERATE_THRESHOLD {
        StatusBand::Moderate
    } else {
        StatusBand::Healthy
    }
}

/// `used / total` as a percentage rounded to two decimals, 0 when `total` is 0.
pub fn utilization_percentage(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = used as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(get_utilization_color(89.0), StatusBand::Warning);
        assert_eq!(get_utilization_color(90.0), StatusBand::Critical);
        assert_eq!(get_utilization_color(74.99), StatusBand::Moderate);
        assert_eq!(get_utilization_color(75.0), StatusBand::Warning);
        assert_eq!(get_utilization_color(49.9), StatusBand::Healthy);
        assert_eq!(get_utilization_color(50.0), StatusBand::Moderate);
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert_eq!(get_utilization_color(-10.0), StatusBand::Healthy);
        assert_eq!(get_utilization_color(150.0), StatusBand::Critical);
        assert_eq!(get_utilization_color(f64::NAN), StatusBand::Healthy);
        assert_eq!(get_utilization_color(f64::INFINITY), StatusBand::Critical);
    }

    #[test]
    fn test_band_order_and_names() {
        assert!(StatusBand::Healthy < StatusBand::Moderate);
        assert!(StatusBand::Warning < StatusBand::Critical);
        assert_eq!(StatusBand::Warning.to_string(), "warning");
        assert_eq!(
            serde_json::to_string(&StatusBand::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn test_utilization_percentage() {
        assert_eq!(utilization_percentage(0, 0), 0.0);
        assert_eq!(utilization_percentage(1, 3), 33.33);
        assert_eq!(utilization_percentage(247, 247), 100.0);
    }
}
