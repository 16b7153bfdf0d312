//! Value axis shared by the bar and line charts
//!
//! The axis always starts at zero and tops out at the observed maximum rounded
//! up to the next multiple of ten, split into three equal bands.

use crate::chartkit::LinearScale;
use admin_core::{MillionsTickFormatter, TickFormatter};

/// Rounding granularity of the top tick
pub const TICK_GRANULARITY: f64 = 10.0;

/// Gridlines drawn per axis (baseline included)
pub const TICK_COUNT: usize = 4;

/// Derived value axis: `max_tick` plus four evenly spaced ticks from zero
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScale {
    pub max_tick: f64,
    pub ticks: [f64; TICK_COUNT],
}

impl AxisScale {
    /// Scale covering every value of every series.
    ///
    /// Values are floored at 1 so an empty (or all-zero) input still yields a
    /// usable `max_tick` of 10.
    pub fn from_series<'a, I>(series: I) -> Self
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let max = series
            .into_iter()
            .flat_map(|values| values.iter().copied())
            .fold(1.0_f64, f64::max);

        Self::from_max(max)
    }

    /// Scale whose top tick is `max` rounded up to the tick granularity
    pub fn from_max(max: f64) -> Self {
        let max = max.max(1.0);
        let max_tick = (max / TICK_GRANULARITY).ceil() * TICK_GRANULARITY;

        let ticks = [0.0, max_tick / 3.0, 2.0 * max_tick / 3.0, max_tick];

        Self { max_tick, ticks }
    }

    /// Pixel scale for an inner area of `inner_height` (zero at the bottom)
    pub fn y_scale(&self, inner_height: f64) -> LinearScale {
        LinearScale::new()
            .domain(0.0, self.max_tick)
            .range(inner_height, 0.0)
    }

    /// Height of `value` in an inner area of `inner_height`
    pub fn scaled_height(&self, value: f64, inner_height: f64) -> f64 {
        value / self.max_tick * inner_height
    }

    /// Tick labels using the default millions formatter
    pub fn labels(&self) -> Vec<String> {
        self.labels_with(&MillionsTickFormatter)
    }

    pub fn labels_with<F: TickFormatter>(&self, formatter: &F) -> Vec<String> {
        self.ticks
            .iter()
            .enumerate()
            .map(|(i, &tick)| formatter.format(tick, i))
            .collect()
    }
}

impl Default for AxisScale {
    fn default() -> Self {
        Self::from_max(1.0)
    }
}
