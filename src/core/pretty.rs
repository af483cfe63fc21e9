//! "Pretty" axis breaks.
//!
//! Chooses a round step of the form {1, 2, 5} x 10^k and extends the input
//! range outwards to whole multiples of that step, following the classic
//! R/Fortran `pretty` heuristic.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Bias toward larger steps when comparing 1x and 2x (and 5x and 10x) bases.
const HIGH_U_BIAS: f64 = 1.5;
/// Bias used when comparing the 2x and 5x bases.
const U5_BIAS: f64 = 0.5 + 1.5 * HIGH_U_BIAS;
const SHRINK_SMALL_RANGE: f64 = 0.75;

/// Ascending ticks with their constant spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub ticks: Vec<f64>,
    pub unit: f64,
}

impl TickPlan {
    #[must_use]
    pub fn first(&self) -> f64 {
        self.ticks[0]
    }

    #[must_use]
    pub fn last(&self) -> f64 {
        self.ticks[self.ticks.len() - 1]
    }

    #[must_use]
    pub fn divisions(&self) -> usize {
        self.ticks.len() - 1
    }
}

/// Returns round tick values bracketing `[lo, hi]` with roughly
/// `target_divisions` intervals.
///
/// At least `target_divisions / 3` divisions are produced, and never fewer
/// than one, so `lo == hi` still yields a bracketing pair. Reversed bounds are
/// swapped; `target_divisions == 0` behaves as 1.
pub fn pretty(lo: f64, hi: f64, target_divisions: usize) -> PlotResult<Vec<f64>> {
    plan_ticks(lo, hi, target_divisions).map(|plan| plan.ticks)
}

pub fn plan_ticks(lo: f64, hi: f64, target_divisions: usize) -> PlotResult<TickPlan> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(PlotError::InvalidData(
            "tick range bounds must be finite".to_owned(),
        ));
    }

    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let n_div = target_divisions.max(1);
    let min_n = (n_div / 3) as i64;
    let rounding_eps = f64::EPSILON.sqrt();
    let dx = hi - lo;

    let mut cell = 1.0;
    let mut small = true;
    if !(dx == 0.0 && hi == 0.0) {
        cell = lo.abs().max(hi.abs());
        let upper = 1.0 + 1.0 / (1.0 + HIGH_U_BIAS);
        small = dx < cell * upper * n_div as f64 * f64::EPSILON * 3.0;
    }

    if small {
        if cell > 10.0 {
            cell = 9.0 + cell / 10.0;
        }
        cell *= SHRINK_SMALL_RANGE;
        if min_n > 1 {
            cell /= min_n as f64;
        }
    } else {
        cell = dx;
        if n_div > 1 {
            cell /= n_div as f64;
        }
    }

    // Extreme magnitudes are clamped so later products stay finite.
    if cell < 20.0 * f64::MIN_POSITIVE {
        cell = 20.0 * f64::MIN_POSITIVE;
    } else if cell * 10.0 > f64::MAX {
        cell = 0.1 * f64::MAX;
    }

    let unit = select_unit(cell);

    let mut ns = (lo / unit + rounding_eps).floor();
    let mut nu = (hi / unit - rounding_eps).ceil();
    while ns * unit > lo + rounding_eps * unit {
        ns -= 1.0;
    }
    while nu * unit < hi - rounding_eps * unit {
        nu += 1.0;
    }

    let ndiv = (0.5 + nu - ns).trunc() as i64;
    if ndiv < min_n {
        let k = min_n - ndiv;
        if ns >= 0.0 {
            nu += (k / 2) as f64;
            ns -= (k / 2 + k % 2) as f64;
        } else {
            ns -= (k / 2) as f64;
            nu += (k / 2 + k % 2) as f64;
        }
    }
    // A division count of zero only happens for lo == hi with n_div < 3.
    let mut ndiv = ((0.5 + nu - ns).trunc() as usize).max(1);

    let first = lo.min(ns * unit);
    // `nu` may sit up to `rounding_eps * unit` below `hi`; extend by whole
    // steps so the last tick still covers it. Shortfalls of a few ulps are
    // rounding noise and are absorbed below instead.
    let slack = 4.0 * f64::EPSILON * hi.abs().max(first.abs());
    while first + ndiv as f64 * unit < hi - slack {
        ndiv += 1;
    }

    // Multiples of the first tick rather than a running sum, so the step does
    // not drift over long sequences.
    let mut ticks = Vec::with_capacity(ndiv + 1);
    ticks.push(first);
    for i in 1..=ndiv {
        let mut value = first + i as f64 * unit;
        if value.abs() < rounding_eps * unit {
            value = 0.0;
        }
        ticks.push(value);
    }
    if let Some(last) = ticks.last_mut() {
        *last = last.max(hi);
    }

    Ok(TickPlan { ticks, unit })
}

/// Picks the step among 1, 2, 5 and 10 times the power of ten below `cell`.
fn select_unit(cell: f64) -> f64 {
    let base = 10f64.powf(cell.log10().floor());
    let mut unit = base;
    if 2.0 * base - cell < HIGH_U_BIAS * (cell - unit) {
        unit = 2.0 * base;
        if 5.0 * base - cell < U5_BIAS * (cell - unit) {
            unit = 5.0 * base;
            if 10.0 * base - cell < HIGH_U_BIAS * (cell - unit) {
                unit = 10.0 * base;
            }
        }
    }
    unit
}

/// Formats a tick or coordinate value for display.
///
/// Uses the shortest representation and falls back to three fixed decimals
/// when that is longer than ten characters.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    let text = value.to_string();
    if text.len() > 10 {
        return format!("{value:.3}");
    }
    text
}
