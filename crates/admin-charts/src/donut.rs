//! Segmented ring (donut) chart
//!
//! Segments are dashes on a circular stroke: each one's dash length is its
//! share of the circumference minus a small gap, and its dash offset is the
//! running sum of the arcs before it.

use admin_core::{DonutItem, Theme, format_percent, sales_total};
use leptos::prelude::*;
use std::f64::consts::PI;

/// Visible separation between neighbouring segments
pub const SEGMENT_GAP: f64 = 3.0;

/// Donut chart configuration
#[derive(Debug, Clone, Copy)]
pub struct DonutConfig {
    pub width: f64,
    pub height: f64,
    pub center_y: f64,
    pub radius: f64,
    /// Full ring thickness (rim stroke width)
    pub ring_width: f64,
    /// How much of the rim shows around each coloured face
    pub rim_edge: f64,
    pub gap: f64,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            width: 220.0,
            height: 170.0,
            center_y: 88.0,
            radius: 56.0,
            ring_width: 20.0,
            rim_edge: 6.0,
            gap: SEGMENT_GAP,
        }
    }
}

impl DonutConfig {
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Stroke width of the coloured face drawn over the rim
    pub fn face_width(&self) -> f64 {
        (self.ring_width - self.rim_edge).max(0.0)
    }

    /// Radius of the disc covering the ring's centre
    pub fn cutout_radius(&self) -> f64 {
        (self.radius - self.ring_width / 2.0 - 2.0).max(0.0)
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// One arc of the ring
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// Share of the circumference before the gap is taken out
    pub arc_length: f64,
    /// Visible dash length (`arc_length - gap`, never negative)
    pub dash: f64,
    /// Sum of the raw arc lengths of all earlier segments
    pub cumulative_offset: f64,
}

impl DonutSegment {
    /// `stroke-dasharray` value: the dash followed by a full-circle gap
    pub fn dash_array(&self, circumference: f64) -> String {
        format!("{} {}", self.dash, circumference)
    }

    /// `stroke-dashoffset` value (negated so segments run clockwise)
    pub fn dash_offset(&self) -> f64 {
        -self.cumulative_offset
    }
}

/// Ring geometry plus the headline percentage
#[derive(Debug, Clone, PartialEq)]
pub struct DonutLayout {
    pub segments: Vec<DonutSegment>,
    pub total: f64,
    /// First item's share of the total, in percent
    pub primary_percent: f64,
    pub circumference: f64,
}

impl DonutLayout {
    /// Badge text, e.g. "47.1%"
    pub fn percent_label(&self) -> String {
        format_percent(self.primary_percent)
    }
}

/// Lay out ring segments in input order
pub fn layout_donut(items: &[DonutItem], config: &DonutConfig) -> DonutLayout {
    let circumference = config.circumference();
    let total = sales_total(items);
    let divisor = if total == 0.0 { 1.0 } else { total };

    if total == 0.0 && !items.is_empty() {
        tracing::debug!(count = items.len(), "donut items sum to zero");
    }

    let primary_percent = items
        .first()
        .map_or(0.0, |item| item.value / divisor * 100.0);

    let mut offset = 0.0;
    let segments = items
        .iter()
        .map(|item| {
            let arc_length = item.value / divisor * circumference;
            let segment = DonutSegment {
                label: item.label.clone(),
                value: item.value,
                color: item.color.clone(),
                arc_length,
                dash: (arc_length - config.gap).max(0.0),
                cumulative_offset: offset,
            };
            offset += arc_length;
            segment
        })
        .collect();

    DonutLayout {
        segments,
        total,
        primary_percent,
        circumference,
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// Donut chart with a percentage badge for the first item
#[component]
pub fn DonutChart(
    #[prop(into)] items: Signal<Vec<DonutItem>>,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(optional)] config: Option<DonutConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let cx = config.width / 2.0;
    let cy = config.center_y;
    let r = config.radius;
    let ring_w = config.ring_width;
    let face_w = config.face_width();
    let cutout_r = config.cutout_radius();

    let chart_layout = move || layout_donut(&items.get(), &config);
    let palette = move || theme.get().palette();

    view! {
        <div class="donut">
            <svg
                class="donut__svg"
                viewBox=format!("0 0 {} {}", config.width, config.height)
                aria-label="Total Sales split"
            >
                <g transform=format!("translate({},{}) rotate(-90)", cx, cy)>
                    // Faint track
                    <circle
                        r=r
                        cx="0"
                        cy="0"
                        fill="none"
                        stroke=move || palette().track
                        stroke-width=ring_w
                    />

                    {move || {
                        let layout = chart_layout();
                        let circumference = layout.circumference;
                        let surface = palette().surface;

                        layout.segments
                            .into_iter()
                            .map(|seg| {
                                let dash_array = seg.dash_array(circumference);
                                let dash_offset = seg.dash_offset();
                                view! {
                                    <>
                                        // Rim: full width, surface colour
                                        <circle
                                            r=r
                                            cx="0"
                                            cy="0"
                                            fill="none"
                                            stroke=surface
                                            stroke-width=ring_w
                                            stroke-linecap="round"
                                            stroke-dasharray=dash_array.clone()
                                            stroke-dashoffset=dash_offset
                                        />
                                        // Face: narrower, segment colour
                                        <circle
                                            r=r
                                            cx="0"
                                            cy="0"
                                            fill="none"
                                            stroke=seg.color
                                            stroke-width=face_w
                                            stroke-linecap="round"
                                            stroke-dasharray=dash_array
                                            stroke-dashoffset=dash_offset
                                        />
                                    </>
                                }
                            })
                            .collect_view()
                    }}
                </g>

                // Inner cutout
                <circle cx=cx cy=cy r=cutout_r fill=move || palette().surface />
            </svg>

            <div class="donut__badge">{move || chart_layout().percent_label()}</div>
        </div>
    }
}

// ============================================================================
// TESTS
// ============================================================================
