//! # admin-charts
//!
//! SVG chart geometry and Leptos chart components for the Admin Dashboard.
//!
//! ## Architecture
//!
//! Every chart is split in two:
//! - a pure layout function that turns series into plain geometry structs
//!   (rectangles, cubic segments, dash parameters, tick values)
//! - a component that renders that geometry as SVG
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: points, rects, linear scale, path builder
//! - `axis` - Shared "round up to a nice tick" value axis
//! - `bar` - Capped bar chart (projections vs actuals)
//! - `line` - Two-series smoothed line chart with area fill
//! - `donut` - Segmented ring chart

pub mod axis;
pub mod bar;
pub mod chartkit;
pub mod donut;
pub mod line;

pub use axis::*;
pub use bar::*;
pub use chartkit::*;
pub use donut::*;
pub use line::*;

// Re-export colors and theme from admin-core for convenience
pub use admin_core::{Theme, colors};

/// Chart margin configuration (space reserved for axis labels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Bar chart margins (wide left gutter for tick labels)
    pub const fn bar() -> Self {
        Self::new(18.0, 16.0, 36.0, 64.0)
    }

    /// Line chart margins
    pub const fn line() -> Self {
        Self::new(28.0, 20.0, 40.0, 56.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::bar()
    }
}

/// Chart canvas dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(560.0, 220.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_area() {
        let dims = ChartDimensions::new(560.0, 220.0).with_margin(ChartMargin::bar());
        assert_eq!(dims.inner_width(), 480.0);
        assert_eq!(dims.inner_height(), 166.0);
        assert_eq!(dims.inner_transform(), "translate(64, 18)");
        assert_eq!(dims.viewbox(), "0 0 560 220");
    }

    #[test]
    fn test_inner_area_never_negative() {
        let dims = ChartDimensions::new(10.0, 10.0).with_margin(ChartMargin::new(20.0, 20.0, 20.0, 20.0));
        assert_eq!(dims.inner_width(), 0.0);
        assert_eq!(dims.inner_height(), 0.0);
    }
}
