//! Two-series smoothed line chart with subtle area fills
//!
//! Both series share one x step and one value axis. Curves are Catmull-Rom
//! splines converted to cubic Bezier segments, so they pass through every
//! data point.

use crate::{
    ChartDimensions, ChartMargin,
    axis::AxisScale,
    chartkit::{PathBuilder, Point, Scale},
};
use admin_core::{Theme, month_labels};
use leptos::prelude::*;

/// Default curve tension
pub const TENSION: f64 = 0.2;

/// Line chart configuration
#[derive(Debug, Clone, Copy)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
    pub tension: f64,
    pub stroke_width: f64,
    pub marker_radius: f64,
    pub show_area: bool,
    pub show_marker: bool,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 240.0,
            margin: ChartMargin::line(),
            tension: TENSION,
            stroke_width: 3.0,
            marker_radius: 4.5,
            show_area: true,
            show_marker: true,
        }
    }
}

impl LineChartConfig {
    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::new(self.width, self.height).with_margin(self.margin)
    }
}

// ============================================================================
// CURVE FITTING
// ============================================================================

/// One cubic Bezier segment; starts where the previous one ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

/// Control points around `p1` for the neighbours `p0` and `p2`.
///
/// Returns `(incoming, outgoing)`: the control point before `p1` and the one
/// after it. Both lie on the line through `p1` parallel to `p0 -> p2`, pushed
/// out in proportion to the adjacent chord lengths.
pub fn control_points(p0: Point, p1: Point, p2: Point, tension: f64) -> (Point, Point) {
    let d01 = nonzero(p0.distance(p1));
    let d12 = nonzero(p1.distance(p2));

    let fa = tension * d01 / (d01 + d12);
    let fb = tension * d12 / (d01 + d12);

    let dx = p2.x - p0.x;
    let dy = p2.y - p0.y;

    (
        Point::new(p1.x - fa * dx, p1.y - fa * dy),
        Point::new(p1.x + fb * dx, p1.y + fb * dy),
    )
}

fn nonzero(d: f64) -> f64 {
    if d == 0.0 { 1.0 } else { d }
}

/// Smooth curve through a sequence of points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmoothedPath {
    pub start: Option<Point>,
    pub segments: Vec<CubicSegment>,
}

impl SmoothedPath {
    /// Fit a curve through `points`. Fewer than two points give an empty path.
    pub fn through(points: &[Point], tension: f64) -> Self {
        if points.len() < 2 {
            return Self::default();
        }

        let segments = (1..points.len())
            .map(|i| {
                let p1 = points[i - 1];
                let p2 = points[i];
                let p0 = if i >= 2 { points[i - 2] } else { p1 };
                let p3 = points.get(i + 1).copied().unwrap_or(p2);

                let (_, c1) = control_points(p0, p1, p2, tension);
                let (c2, _) = control_points(p1, p2, p3, tension);

                CubicSegment { c1, c2, end: p2 }
            })
            .collect();

        Self {
            start: Some(points[0]),
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// SVG path data (empty string for an empty path)
    pub fn to_svg(&self) -> String {
        let Some(start) = self.start.filter(|_| !self.is_empty()) else {
            return String::new();
        };

        self.segments
            .iter()
            .fold(PathBuilder::new().move_to(start.x, start.y), |path, s| {
                path.cubic_to(s.c1, s.c2, s.end)
            })
            .build()
    }

    /// The curve closed along the baseline from the right edge of the inner
    /// area back to its left edge, so every fill spans the full width
    pub fn area_svg(&self, baseline: f64, inner_width: f64) -> String {
        if self.is_empty() {
            return String::new();
        }

        PathBuilder::extend(&self.to_svg())
            .line_to(inner_width, baseline)
            .line_to(0.0, baseline)
            .close()
            .build()
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Full line chart geometry in inner-area coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartLayout {
    pub axis: AxisScale,
    /// Primary series (drawn on top, carries the end marker)
    pub path_a: SmoothedPath,
    /// Comparison series
    pub path_b: SmoothedPath,
    /// One x per category
    pub x_positions: Vec<f64>,
    pub labels: Vec<&'static str>,
    /// Last value of the primary series
    pub last_point: Option<Point>,
    /// y of the zero line (bottom of the inner area)
    pub baseline: f64,
    pub inner_width: f64,
}

/// Lay out two series on a shared x step and value axis
pub fn layout_lines(series_a: &[f64], series_b: &[f64], config: &LineChartConfig) -> LineChartLayout {
    let dims = config.dimensions();
    let inner_width = dims.inner_width();
    let inner_height = dims.inner_height();

    let n = series_a.len().max(series_b.len());
    let x_step = if n > 1 {
        inner_width / (n - 1) as f64
    } else {
        inner_width
    };

    let axis = AxisScale::from_series([series_a, series_b]);
    let y_scale = axis.y_scale(inner_height);

    let project = |values: &[f64]| -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(i as f64 * x_step, y_scale.scale(v)))
            .collect()
    };

    let points_a = project(series_a);
    let points_b = project(series_b);

    for (name, points) in [("primary", &points_a), ("comparison", &points_b)] {
        if points.len() < 2 {
            tracing::debug!(series = name, len = points.len(), "too few points for a line");
        }
    }

    LineChartLayout {
        path_a: SmoothedPath::through(&points_a, config.tension),
        path_b: SmoothedPath::through(&points_b, config.tension),
        last_point: points_a.last().copied(),
        x_positions: (0..n).map(|i| i as f64 * x_step).collect(),
        labels: month_labels(n).to_vec(),
        baseline: inner_height,
        inner_width,
        axis,
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Line chart component (current vs previous period)
#[component]
pub fn LineChart(
    #[prop(into)] data_a: Signal<Vec<f64>>,
    #[prop(into)] data_b: Signal<Vec<f64>>,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(optional)] config: Option<LineChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let dims = config.dimensions();
    let stroke_w = config.stroke_width;
    let marker_r = config.marker_radius;
    let show_area = config.show_area;
    let show_marker = config.show_marker;

    let chart_layout = move || layout_lines(&data_a.get(), &data_b.get(), &config);
    let palette = move || theme.get().palette();

    view! {
        <svg
            class="chart-line"
            viewBox=dims.viewbox()
            role="img"
            aria-label="Revenue trend"
            style="width: 100%; height: 100%;"
        >
            // Gradients for the area fills
            <defs>
                <linearGradient id="line-grad-a" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color=move || palette().series_primary stop-opacity="0.10" />
                    <stop offset="100%" stop-color=move || palette().series_primary stop-opacity="0" />
                </linearGradient>
                <linearGradient id="line-grad-b" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color=move || palette().series_secondary stop-opacity="0.20" />
                    <stop offset="100%" stop-color=move || palette().series_secondary stop-opacity="0" />
                </linearGradient>
            </defs>

            <g transform=dims.inner_transform()>
                // Horizontal grid + y labels
                {move || {
                    let layout = chart_layout();
                    let palette = palette();
                    let y_scale = layout.axis.y_scale(layout.baseline);
                    let inner_w = layout.inner_width;
                    let last = layout.axis.ticks.len() - 1;

                    layout.axis.ticks
                        .into_iter()
                        .zip(layout.axis.labels())
                        .enumerate()
                        .map(|(i, (tick, label))| {
                            let y = y_scale.scale(tick);
                            view! {
                                <g>
                                    <line
                                        x1="0"
                                        x2=inner_w
                                        y1=y
                                        y2=y
                                        stroke=palette.ring
                                        stroke-width="1"
                                        opacity={if i == last { 1.0 } else { 0.5 }}
                                    />
                                    <text
                                        x="-10"
                                        y={y + 4.0}
                                        text-anchor="end"
                                        font-size="12"
                                        fill=palette.text_weak
                                    >
                                        {label}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
                }}

                // X labels
                {move || {
                    let layout = chart_layout();
                    let palette = palette();
                    let label_y = layout.baseline + 22.0;

                    layout.x_positions
                        .into_iter()
                        .zip(layout.labels)
                        .map(|(x, label)| {
                            view! {
                                <text
                                    x=x
                                    y=label_y
                                    text-anchor="middle"
                                    font-size="12"
                                    fill=palette.text_weak
                                >
                                    {label}
                                </text>
                            }
                        })
                        .collect_view()
                }}

                // Area fills, comparison first so the primary sits on top
                {move || {
                    show_area.then(|| {
                        let layout = chart_layout();
                        let area_b = layout.path_b.area_svg(layout.baseline, layout.inner_width);
                        let area_a = layout.path_a.area_svg(layout.baseline, layout.inner_width);
                        view! {
                            <>
                                {(!area_b.is_empty()).then(|| view! {
                                    <path d=area_b fill="url(#line-grad-b)" stroke="none" />
                                })}
                                {(!area_a.is_empty()).then(|| view! {
                                    <path d=area_a fill="url(#line-grad-a)" stroke="none" />
                                })}
                            </>
                        }
                    })
                }}

                // Lines
                {move || {
                    let layout = chart_layout();
                    let palette = palette();
                    let line_b = layout.path_b.to_svg();
                    let line_a = layout.path_a.to_svg();
                    view! {
                        <>
                            {(!line_b.is_empty()).then(|| view! {
                                <path
                                    d=line_b
                                    stroke=palette.series_secondary
                                    stroke-width=stroke_w
                                    fill="none"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    opacity="0.9"
                                />
                            })}
                            {(!line_a.is_empty()).then(|| view! {
                                <path
                                    d=line_a
                                    stroke=palette.series_primary
                                    stroke-width=stroke_w
                                    fill="none"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                />
                            })}
                        </>
                    }
                }}

                // End marker on the primary series
                {move || {
                    if show_marker {
                        chart_layout().last_point.map(|p| {
                            view! {
                                <circle
                                    cx=p.x
                                    cy=p.y
                                    r=marker_r
                                    fill=palette().series_primary
                                />
                            }
                        })
                    } else {
                        None
                    }
                }}
            </g>
        </svg>
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_give_empty_paths() {
        let layout = layout_lines(&[], &[], &LineChartConfig::default());
        assert!(layout.path_a.is_empty());
        assert!(layout.path_b.is_empty());
        assert_eq!(layout.path_a.to_svg(), "");
        assert_eq!(layout.path_a.area_svg(layout.baseline, layout.inner_width), "");
        assert_eq!(layout.last_point, None);
        assert!(layout.x_positions.is_empty());
    }

    #[test]
    fn test_single_point_has_marker_but_no_line() {
        let config = LineChartConfig::default();
        let layout = layout_lines(&[5.0], &[], &config);

        assert!(layout.path_a.is_empty());
        assert!(layout.path_b.is_empty());
        assert_eq!(layout.x_positions, vec![0.0]);

        let marker = layout.last_point.unwrap();
        assert_eq!(marker.x, 0.0);
        assert!(marker.y < layout.baseline);
    }

    #[test]
    fn test_two_series_share_axis() {
        let layout = layout_lines(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &LineChartConfig::default());

        assert!(!layout.path_a.is_empty());
        assert!(!layout.path_b.is_empty());
        assert_eq!(layout.axis.max_tick, 10.0);
        assert_eq!(layout.path_a.segments.len(), 2);
        assert!(layout.path_a.to_svg().starts_with("M0.00,"));
    }

    #[test]
    fn test_x_step_spans_inner_width() {
        let config = LineChartConfig::default();
        let layout = layout_lines(&[12.0, 10.0, 11.0, 14.0, 18.0, 23.0], &[8.0, 9.0], &config);

        assert_eq!(layout.x_positions.len(), 6);
        assert_eq!(layout.x_positions[0], 0.0);
        assert!((layout.x_positions[5] - layout.inner_width).abs() < 1e-9);
        assert_eq!(layout.labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(layout.axis.max_tick, 30.0);
    }

    #[test]
    fn test_curve_passes_through_points() {
        let points = [
            Point::new(0.0, 100.0),
            Point::new(50.0, 40.0),
            Point::new(100.0, 70.0),
            Point::new(150.0, 10.0),
        ];
        let path = SmoothedPath::through(&points, TENSION);

        assert_eq!(path.start, Some(points[0]));
        let ends: Vec<Point> = path.segments.iter().map(|s| s.end).collect();
        assert_eq!(ends, points[1..].to_vec());
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 10.0), Point::new(20.0, 20.0)];
        let path = SmoothedPath::through(&points, TENSION);

        for s in &path.segments {
            assert!((s.c1.x - s.c1.y).abs() < 1e-9);
            assert!((s.c2.x - s.c2.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_control_points_with_repeated_endpoint() {
        let p = Point::new(5.0, 5.0);
        let q = Point::new(15.0, 5.0);
        // p0 == p1 at the left boundary: zero chord falls back to 1
        let (incoming, outgoing) = control_points(p, p, q, TENSION);

        assert!(incoming.x < p.x);
        assert!(outgoing.x > p.x);
        assert!(incoming.x.is_finite() && outgoing.x.is_finite());
    }

    #[test]
    fn test_area_closes_to_baseline() {
        let points = [Point::new(0.0, 50.0), Point::new(100.0, 20.0)];
        let path = SmoothedPath::through(&points, TENSION);
        let area = path.area_svg(172.0, 100.0);

        assert!(area.starts_with(&path.to_svg()));
        assert!(area.ends_with("L100.00,172.00L0.00,172.00Z"));
    }

    #[test]
    fn test_short_series_area_spans_inner_width() {
        let config = LineChartConfig::default();
        let layout = layout_lines(&[12.0, 10.0, 11.0, 14.0, 18.0, 23.0], &[8.0, 9.0], &config);

        assert_eq!(layout.inner_width, 684.0);
        assert_eq!(layout.baseline, 172.0);

        let end_b = layout.path_b.segments.last().unwrap().end;
        assert!(end_b.x < layout.inner_width);

        let area_b = layout.path_b.area_svg(layout.baseline, layout.inner_width);
        assert!(area_b.ends_with("L684.00,172.00L0.00,172.00Z"));

        let area_a = layout.path_a.area_svg(layout.baseline, layout.inner_width);
        assert!(area_a.ends_with("L684.00,172.00L0.00,172.00Z"));
    }
}
