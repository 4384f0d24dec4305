//! Pointwise comparison of two series on the same grid.
//!
//! Only the overlapping prefix is compared when lengths differ (for example
//! after an early stop).

use pendulum_core::TimeSeries;

/// Largest |a_i − b_i| over the overlapping samples, or 0 if there are none.
#[must_use]
pub fn max_abs_difference(a: &TimeSeries, b: &TimeSeries) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// |a − b| at the last overlapping sample, or `None` if either is empty.
#[must_use]
pub fn final_abs_difference(a: &TimeSeries, b: &TimeSeries) -> Option<f64> {
    let last = a.len().min(b.len()).checked_sub(1)?;
    Some((a[last] - b[last]).abs())
}
