//! Closed-form small-angle solution.
//!
//! Linearizing sin θ ≈ θ turns the pendulum into a simple harmonic oscillator,
//! θ'' + (g/L)·θ = 0. Released from θ₀, its solution on the grid is:
//!
//! ```text
//! theta[i] = theta0 * cos(sqrt(g / L) * t[i])
//! ```
//!
//! The initial angular velocity is not part of this approximation.

use pendulum_core::{SimulationParameters, TimeSeries};

/// Evaluates the small-angle solution at every sample of the parameters' grid.
///
/// Each sample depends only on its own time, so the result has the same
/// length as [`SimulationParameters::time_grid`] and its first sample is
/// exactly θ₀.
#[must_use]
pub fn solve(params: &SimulationParameters) -> TimeSeries {
    let theta0 = params.initial_state().theta;
    let frequency = params.natural_frequency();

    params
        .time_grid()
        .iter()
        .map(|t| theta0 * (frequency * t).cos())
        .collect()
}
