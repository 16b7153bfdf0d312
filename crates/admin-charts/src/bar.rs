//! Capped bar chart (projections vs actuals)
//!
//! Each bar is a square-cornered base carrying a rounded-top cap. Bars are
//! spread so that they fill the inner width exactly.

use crate::{
    ChartDimensions, ChartMargin,
    axis::AxisScale,
    chartkit::{Rect, Scale, rounded_top_rect_path},
    colors,
};
use admin_core::{MONTHS, Theme};
use leptos::prelude::*;

/// Preferred bar width
pub const IDEAL_BAR_WIDTH: f64 = 28.0;
/// Bars never sit closer than this
pub const MIN_BAR_GAP: f64 = 10.0;
/// Space between the tick labels and the first bar
pub const AXIS_INSET: f64 = 8.0;
/// Share of a bar's height drawn as the square base
pub const BASE_RATIO: f64 = 0.8;
/// Floor for the cap so it stays visible on tiny values
pub const MIN_CAP_HEIGHT: f64 = 4.0;
/// Corner radius of the cap before clamping
pub const CAP_RADIUS: f64 = 8.0;

/// Bar chart configuration
#[derive(Debug, Clone, Copy)]
pub struct BarChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
    pub ideal_bar_width: f64,
    pub min_gap: f64,
    pub axis_inset: f64,
    pub cap_radius: f64,
    pub base_fill: &'static str,
    pub cap_fill: &'static str,
    pub show_grid: bool,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 220.0,
            margin: ChartMargin::bar(),
            ideal_bar_width: IDEAL_BAR_WIDTH,
            min_gap: MIN_BAR_GAP,
            axis_inset: AXIS_INSET,
            cap_radius: CAP_RADIUS,
            base_fill: colors::BAR_BASE,
            cap_fill: colors::BAR_CAP,
            show_grid: true,
        }
    }
}

impl BarChartConfig {
    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::new(self.width, self.height).with_margin(self.margin)
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Horizontal placement shared by all bars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub bar_width: f64,
    pub gap: f64,
    pub left_inset: f64,
    /// Width available to bars and gaps
    pub span: f64,
}

impl BarLayout {
    /// Solve bar width and gap so `count` bars fill `span`.
    ///
    /// The ideal width is kept while the resulting gap stays at or above
    /// `min_gap`; otherwise the gap is pinned and the width shrinks. A single
    /// bar (or none) has no gap term and spans the full width.
    pub fn solve(count: usize, span: f64, ideal_width: f64, min_gap: f64, left_inset: f64) -> Self {
        let span = span.max(0.0);

        if count <= 1 {
            return Self {
                bar_width: span,
                gap: 0.0,
                left_inset,
                span,
            };
        }

        let n = count as f64;
        let mut bar_width = ideal_width;
        let mut gap = (span - n * bar_width) / (n - 1.0);

        if gap < min_gap {
            gap = min_gap;
            bar_width = ((span - gap * (n - 1.0)) / n).max(0.0);
            tracing::debug!(count, bar_width, "bar gap pinned to minimum");
        }

        Self {
            bar_width,
            gap,
            left_inset,
            span,
        }
    }

    /// Left edge of the bar at `index`
    pub fn x(&self, index: usize) -> f64 {
        self.left_inset + index as f64 * (self.bar_width + self.gap)
    }

    /// Width taken by `count` bars and the gaps between them
    pub fn occupied_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let n = count as f64;
        n * self.bar_width + (n - 1.0) * self.gap
    }
}

/// One bar: square base plus rounded cap stacked on top
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub label: &'static str,
    pub value: f64,
    /// Value mapped onto the inner height
    pub scaled_height: f64,
    pub base: Rect,
    pub cap: Rect,
    /// Cap corner radius after clamping
    pub cap_radius: f64,
    pub cap_path: String,
}

impl BarGeometry {
    /// Drawn height (base + cap)
    pub fn height(&self) -> f64 {
        self.base.height + self.cap.height
    }
}

/// Full bar chart geometry in inner-area coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub axis: AxisScale,
    pub layout: BarLayout,
    pub bars: Vec<BarGeometry>,
    pub inner_width: f64,
    pub inner_height: f64,
}

/// Split a scaled height into (base, cap).
///
/// The cap takes the top fifth with a floor of [`MIN_CAP_HEIGHT`]; the base
/// takes the rest, so both add up to `scaled` whenever it clears the floor.
pub fn split_bar_height(scaled: f64) -> (f64, f64) {
    let cap = (scaled - scaled * BASE_RATIO).max(MIN_CAP_HEIGHT);
    let base = (scaled - cap).max(0.0);
    (base, cap)
}

/// Lay out one bar per value, left to right
pub fn layout_bars(series: &[f64], config: &BarChartConfig) -> BarChartLayout {
    let dims = config.dimensions();
    let inner_width = dims.inner_width();
    let inner_height = dims.inner_height();

    let axis = AxisScale::from_series([series]);
    let layout = BarLayout::solve(
        series.len(),
        inner_width - config.axis_inset,
        config.ideal_bar_width,
        config.min_gap,
        config.axis_inset,
    );

    let bars = series
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let scaled_height = axis.scaled_height(value, inner_height);
            let (base_h, cap_h) = split_bar_height(scaled_height);
            let x = layout.x(index);

            let base = Rect::new(x, inner_height - base_h, layout.bar_width, base_h);
            let cap = Rect::new(x, base.y - cap_h, layout.bar_width, cap_h);
            let cap_radius = config.cap_radius.min(cap_h).min(layout.bar_width / 2.0);

            BarGeometry {
                index,
                label: MONTHS.get(index).copied().unwrap_or(""),
                value,
                scaled_height,
                base,
                cap,
                cap_radius,
                cap_path: rounded_top_rect_path(cap, cap_radius),
            }
        })
        .collect();

    BarChartLayout {
        axis,
        layout,
        bars,
        inner_width,
        inner_height,
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Bar chart component
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<f64>>,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(optional)] config: Option<BarChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let dims = config.dimensions();
    let show_grid = config.show_grid;

    let chart_layout = move || layout_bars(&data.get(), &config);

    view! {
        <svg
            class="chart-bars"
            viewBox=dims.viewbox()
            role="img"
            aria-label="Projections vs Actuals"
            style="width: 100%; height: 100%;"
        >
            <g transform=dims.inner_transform()>
                // Grid + tick labels
                {move || {
                    let layout = chart_layout();
                    let palette = theme.get().palette();
                    let y_scale = layout.axis.y_scale(layout.inner_height);
                    let inner_w = layout.inner_width;

                    layout.axis.ticks
                        .into_iter()
                        .zip(layout.axis.labels())
                        .enumerate()
                        .map(|(i, (tick, label))| {
                            let y = y_scale.scale(tick);
                            view! {
                                <g>
                                    {show_grid.then(|| view! {
                                        <line
                                            x1="0"
                                            x2=inner_w
                                            y1=y
                                            y2=y
                                            stroke=palette.ring
                                            stroke-width="1"
                                            stroke-linecap="round"
                                            opacity={if i == 0 { 1.0 } else { 0.5 }}
                                        />
                                    })}
                                    <text
                                        x="-12"
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

                // Bars
                {move || {
                    let layout = chart_layout();
                    let palette = theme.get().palette();
                    let label_y = layout.inner_height + 18.0;

                    layout.bars
                        .into_iter()
                        .map(|bar| {
                            view! {
                                <g class="bar">
                                    // Base: square corners
                                    <rect
                                        x=bar.base.x
                                        y=bar.base.y
                                        width=bar.base.width
                                        height=bar.base.height
                                        fill=config.base_fill
                                    />
                                    // Cap: rounded top only
                                    <path d=bar.cap_path fill=config.cap_fill />
                                    <text
                                        x={bar.base.center_x()}
                                        y=label_y
                                        text-anchor="middle"
                                        font-size="12"
                                        fill=palette.text_weak
                                    >
                                        {bar.label}
                                    </text>
                                </g>
                            }
                        })
                        .collect_view()
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

    const EPS: f64 = 1e-9;

    #[test]
    fn test_projections_scenario() {
        let config = BarChartConfig::default();
        let chart = layout_bars(&[28.0, 22.0, 24.0, 26.0, 23.0, 25.0], &config);

        assert_eq!(chart.axis.max_tick, 30.0);
        assert_eq!(chart.axis.ticks, [0.0, 10.0, 20.0, 30.0]);
        assert_eq!(chart.bars.len(), 6);
        assert!(chart.bars.iter().all(|b| b.cap.height >= MIN_CAP_HEIGHT));

        let span = chart.inner_width - AXIS_INSET;
        assert!((chart.layout.occupied_width(6) - span).abs() < EPS);
        assert_eq!(chart.layout.bar_width, IDEAL_BAR_WIDTH);
    }

    #[test]
    fn test_ideal_width_branch() {
        let layout = BarLayout::solve(6, 472.0, 28.0, 10.0, 8.0);
        assert_eq!(layout.bar_width, 28.0);
        assert!((layout.gap - 60.8).abs() < EPS);
        assert!((layout.occupied_width(6) - 472.0).abs() < EPS);
    }

    #[test]
    fn test_pinned_gap_branch() {
        let layout = BarLayout::solve(20, 472.0, 28.0, 10.0, 8.0);
        assert_eq!(layout.gap, 10.0);
        assert!((layout.bar_width - 14.1).abs() < EPS);
        assert!((layout.occupied_width(20) - 472.0).abs() < EPS);
    }

    #[test]
    fn test_single_bar_spans_full_width() {
        let layout = BarLayout::solve(1, 472.0, 28.0, 10.0, 8.0);
        assert_eq!(layout.bar_width, 472.0);
        assert_eq!(layout.gap, 0.0);
        assert_eq!(layout.x(0), 8.0);
    }

    #[test]
    fn test_height_decomposition() {
        let config = BarChartConfig::default();
        let chart = layout_bars(&[28.0, 3.0, 15.0], &config);

        for bar in &chart.bars {
            assert!((bar.height() - bar.scaled_height).abs() < EPS);
            assert!(bar.cap.height >= MIN_CAP_HEIGHT);
            assert!((bar.cap.bottom() - bar.base.y).abs() < EPS);
            assert!((bar.base.bottom() - chart.inner_height).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_value_keeps_visible_cap() {
        let config = BarChartConfig::default();
        let chart = layout_bars(&[0.0, 10.0], &config);
        let zero = &chart.bars[0];

        assert_eq!(zero.scaled_height, 0.0);
        assert_eq!(zero.base.height, 0.0);
        assert_eq!(zero.cap.height, MIN_CAP_HEIGHT);
        assert!(zero.cap_radius <= zero.cap.height);
    }

    #[test]
    fn test_empty_series() {
        let chart = layout_bars(&[], &BarChartConfig::default());
        assert!(chart.bars.is_empty());
        assert_eq!(chart.axis.max_tick, 10.0);
    }

    #[test]
    fn test_bars_left_to_right_with_labels() {
        let chart = layout_bars(&[5.0, 6.0, 7.0], &BarChartConfig::default());
        let labels: Vec<_> = chart.bars.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar"]);
        assert!(chart.bars.windows(2).all(|w| w[0].base.x < w[1].base.x));
        assert_eq!(chart.bars[0].base.x, AXIS_INSET);
    }

    #[test]
    fn test_split_bar_height() {
        assert_eq!(split_bar_height(100.0), (80.0, 20.0));
        assert_eq!(split_bar_height(10.0), (6.0, 4.0));
        assert_eq!(split_bar_height(2.0), (0.0, 4.0));
    }
}
