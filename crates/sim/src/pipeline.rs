use pendulum_core::{SimulationParameters, TimeGrid, TimeSeries};
use pendulum_plot::Trace;
use pendulum_solvers::{
    compare,
    energy::{EnergyDrift, EnergyMonitor},
    small_angle,
    transient::semi_implicit_euler,
};
use tracing::{debug, info};

/// Legend label of the small-angle solution.
pub const LINEAR_LABEL: &str = "Linear approx (small-angle)";

/// Legend label of the integrated solution.
pub const NONLINEAR_LABEL: &str = "Non-linear";

/// Every series of one run, aligned to the same grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    pub params: SimulationParameters,
    pub grid: TimeGrid,

    /// Small-angle angle samples, in rad.
    pub linear: TimeSeries,

    /// Non-linear angle samples, in rad.
    pub theta: TimeSeries,

    /// Non-linear angular velocity samples, in rad/s.
    pub omega: TimeSeries,

    /// Energy summary of the non-linear solution.
    pub energy: Option<EnergyDrift>,
}

impl Results {
    /// Both angle curves against time, small-angle first.
    #[must_use]
    pub fn traces(&self) -> Vec<Trace> {
        vec![
            Trace::from_series(LINEAR_LABEL, &self.grid, &self.linear),
            Trace::from_series(NONLINEAR_LABEL, &self.grid, &self.theta),
        ]
    }

    /// Largest gap between the two angle curves, in rad.
    #[must_use]
    pub fn max_divergence(&self) -> f64 {
        compare::max_abs_difference(&self.linear, &self.theta)
    }
}

/// Computes the small-angle and non-linear solutions for `params`.
///
/// Runs to completion before returning; nothing is written anywhere.
#[must_use]
pub fn simulate(params: &SimulationParameters) -> Results {
    let grid = params.time_grid();
    debug!(
        samples = grid.len(),
        spacing = grid.spacing(),
        "built time grid"
    );

    let linear = small_angle::solve(params);

    let mut monitor = EnergyMonitor::new(params.pendulum());
    let solution = semi_implicit_euler::solve(params, &mut monitor);
    let energy = monitor.drift().copied();

    let results = Results {
        params: *params,
        grid,
        linear,
        theta: solution.theta,
        omega: solution.omega,
        energy,
    };

    info!(
        samples = results.grid.len(),
        steps = solution.steps,
        max_divergence = results.max_divergence(),
        "integrated pendulum"
    );
    if let Some(drift) = &results.energy {
        debug!(
            initial = drift.initial(),
            relative_deviation = drift.relative_deviation(),
            "energy drift"
        );
    }

    results
}
