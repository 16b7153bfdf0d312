//! # admin-core
//!
//! Core domain types for the Admin Dashboard.
//! Implements Strategy pattern for axis and amount formatting.

pub mod dataset;
pub mod orders;
pub mod sales;
pub mod series;

pub use dataset::*;
pub use orders::*;
pub use sales::*;
pub use series::*;

use serde::{Deserialize, Serialize};

/// Category labels shared by the bar and line charts
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// First `count` month labels (clamped to a year)
pub fn month_labels(count: usize) -> &'static [&'static str] {
    &MONTHS[..count.min(MONTHS.len())]
}

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for axis tick labels
pub trait TickFormatter: Send + Sync {
    /// Format the tick at `index` (0 is the baseline)
    fn format(&self, tick: f64, index: usize) -> String;
}

/// Strategy trait for monetary amounts
pub trait AmountFormatter: Send + Sync {
    fn format(&self, amount: f64) -> String;
}

/// Tick labels in millions: baseline is a bare "0", others read "10M"
#[derive(Debug, Clone, Default)]
pub struct MillionsTickFormatter;

impl TickFormatter for MillionsTickFormatter {
    fn format(&self, tick: f64, index: usize) -> String {
        if index == 0 {
            "0".to_string()
        } else {
            format!("{}M", tick.round())
        }
    }
}

/// Dollar amounts with fixed decimals
#[derive(Debug, Clone)]
pub struct DollarFormatter {
    pub decimals: usize,
}

impl Default for DollarFormatter {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

impl AmountFormatter for DollarFormatter {
    fn format(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let fixed = format!("{:.prec$}", amount.abs(), prec = self.decimals);
        let (whole, frac) = match fixed.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (fixed.as_str(), None),
        };

        match frac {
            Some(frac) => format!("{}${}.{}", sign, group_thousands(whole), frac),
            None => format!("{}${}", sign, group_thousands(whole)),
        }
    }
}

/// Insert a comma every three digits from the right ("6518" -> "6,518")
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Percentage with a single decimal (e.g. "47.1%")
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

// ============================================================================
// THEME
// ============================================================================

/// Application theme, injected into charts as an explicit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for the document's `data-theme` attribute
    pub fn attr(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Light => &colors::LIGHT,
            Self::Dark => &colors::DARK,
        }
    }
}

/// Resolved colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page / card surface (also the donut rim)
    pub surface: &'static str,
    /// Gridlines and faint rings
    pub ring: &'static str,
    pub text: &'static str,
    /// Axis and category labels
    pub text_weak: &'static str,
    /// Primary line series and its end marker
    pub series_primary: &'static str,
    /// Secondary (comparison) line series
    pub series_secondary: &'static str,
    /// Donut track under the segments
    pub track: &'static str,
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    use super::Palette;

    pub const BAR_BASE: &str = "#A8C5DA";
    pub const BAR_CAP: &str = "#D9D9D9";
    pub const SUCCESS: &str = "#4AA785";
    pub const DANGER: &str = "#FF4747";

    pub const LIGHT: Palette = Palette {
        surface: "#FFFFFF",
        ring: "#E5E7EB",
        text: "#111111",
        text_weak: "#8A8A8A",
        series_primary: "#111111",
        series_secondary: "#9DB9D6",
        track: "rgba(17, 17, 17, 0.10)",
    };

    pub const DARK: Palette = Palette {
        surface: "#1C1C1C",
        ring: "#2E2E2E",
        text: "#FAFAFA",
        text_weak: "#9A9A9A",
        series_primary: "#C6C7F8",
        series_secondary: "#A8C5DA",
        track: "rgba(255, 255, 255, 0.10)",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_formatter_strategy() {
        let formatter = MillionsTickFormatter;
        assert_eq!(formatter.format(0.0, 0), "0");
        assert_eq!(formatter.format(10.0, 1), "10M");
        assert_eq!(formatter.format(13.333, 1), "13M");
    }

    #[test]
    fn test_dollar_formatter() {
        let formatter = DollarFormatter::default();
        assert_eq!(formatter.format(300.56), "$300.56");
        assert_eq!(formatter.format(48.9), "$48.90");
        assert_eq!(formatter.format(6518.18), "$6,518.18");
        assert_eq!(formatter.format(1_234_567.0), "$1,234,567.00");
        assert_eq!(DollarFormatter { decimals: 0 }.format(695.0), "$695");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().attr(), "light");
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }

    #[test]
    fn test_month_labels_clamped() {
        assert_eq!(month_labels(3), &["Jan", "Feb", "Mar"]);
        assert_eq!(month_labels(40).len(), 12);
        assert!(month_labels(0).is_empty());
    }
}
