//! # chartkit
//!
//! Core chart primitives: points, rectangles, scales and the SVG path builder.

use std::fmt::Write;

// ============================================================================
// GEOMETRY PRIMITIVES
// ============================================================================

/// Point in chart (inner area) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Axis-aligned rectangle (y grows downward, as in SVG)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    /// Continue an existing path string
    pub fn extend(path: &str) -> Self {
        let mut commands = String::with_capacity(path.len() + 64);
        commands.push_str(path);
        Self { commands }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "M{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "L{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn cubic_to(mut self, c1: Point, c2: Point, end: Point) -> Self {
        write!(
            self.commands,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            c1.x, c1.y, c2.x, c2.y, end.x, end.y
        ).unwrap();
        self
    }

    /// Elliptical arc with both radii `r`, no rotation, small arc
    pub fn arc_to(mut self, r: f64, sweep: bool, x: f64, y: f64) -> Self {
        write!(
            self.commands,
            "A{:.2},{:.2},0,0,{},{:.2},{:.2}",
            r, r, sweep as u8, x, y
        ).unwrap();
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Rectangle path with only the top two corners rounded (bottom stays square).
/// The radius is clamped to the rectangle's height and half its width.
pub fn rounded_top_rect_path(rect: Rect, radius: f64) -> String {
    let Rect { x, y, width: w, height: h } = rect;
    let r = radius.min(h).min(w / 2.0).max(0.0);

    PathBuilder::new()
        .move_to(x, rect.bottom())
        .line_to(x, y + r)
        .arc_to(r, true, x + r, y)
        .line_to(x + w - r, y)
        .arc_to(r, true, x + w, y + r)
        .line_to(x + w, rect.bottom())
        .close()
        .build()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale_inverted_range() {
        let scale = LinearScale::new().domain(0.0, 30.0).range(166.0, 0.0);

        assert_eq!(scale.scale(0.0), 166.0);
        assert_eq!(scale.scale(30.0), 0.0);
        assert_eq!(scale.scale(15.0), 83.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new().domain(5.0, 5.0).range(0.0, 100.0);
        assert_eq!(scale.scale(5.0), 50.0);
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .cubic_to(Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 0.0))
            .line_to(3.0, 10.0)
            .close()
            .build();

        assert_eq!(path, "M0.00,0.00C1.00,1.00,2.00,2.00,3.00,0.00L3.00,10.00Z");
    }

    #[test]
    fn test_path_builder_extend() {
        let path = PathBuilder::extend("M1.00,1.00").line_to(2.0, 2.0).build();
        assert_eq!(path, "M1.00,1.00L2.00,2.00");
    }

    #[test]
    fn test_rounded_top_rect_clamps_radius() {
        let path = rounded_top_rect_path(Rect::new(0.0, 0.0, 28.0, 4.0), 8.0);

        assert!(path.starts_with("M0.00,4.00"));
        assert!(path.contains("A4.00,4.00,0,0,1,4.00,0.00"));
        assert!(path.ends_with("L28.00,4.00Z"));
    }

    #[test]
    fn test_rounded_top_rect_narrow_bar() {
        let path = rounded_top_rect_path(Rect::new(0.0, 0.0, 6.0, 20.0), 8.0);
        assert!(path.contains("A3.00,3.00"));
    }

    #[test]
    fn test_point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }
}
