//! Mechanical energy diagnostics.
//!
//! The pendulum conserves E = ½·ω² − (g/L)·cos θ (per unit m·L²). A
//! symplectic integrator keeps the numerical energy inside a narrow band
//! around E₀; a steadily growing deviation points to an unstable scheme or a
//! time step that is too large.
//!
//! Deviations are reported both in absolute terms and relative to g/L, the
//! scale of the potential energy, which stays meaningful when E₀ is near zero.

use pendulum_core::{Observer, Pendulum, PendulumState};

use crate::transient::semi_implicit_euler::{Action, Event};

/// Running summary of the energy over a sequence of states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyDrift {
    scale: f64,
    initial: f64,
    min: f64,
    max: f64,
    max_deviation: f64,
}

impl EnergyDrift {
    /// Summarizes the energy of `states`, or returns `None` if there are none.
    pub fn from_states<I>(pendulum: &Pendulum, states: I) -> Option<Self>
    where
        I: IntoIterator<Item = PendulumState>,
    {
        let mut states = states.into_iter();
        let mut drift = Self::start(pendulum, states.next()?);
        for state in states {
            drift.record(pendulum.energy(state));
        }
        Some(drift)
    }

    fn start(pendulum: &Pendulum, state: PendulumState) -> Self {
        let initial = pendulum.energy(state);
        Self {
            scale: pendulum.g_over_l(),
            initial,
            min: initial,
            max: initial,
            max_deviation: 0.0,
        }
    }

    fn record(&mut self, energy: f64) {
        self.min = self.min.min(energy);
        self.max = self.max.max(energy);
        self.max_deviation = self.max_deviation.max((energy - self.initial).abs());
    }

    /// Energy of the first state.
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.initial
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Largest |E_i − E₀| seen.
    #[must_use]
    pub fn max_deviation(&self) -> f64 {
        self.max_deviation
    }

    /// Largest |E_i − E₀| divided by g/L.
    #[must_use]
    pub fn relative_deviation(&self) -> f64 {
        self.max_deviation / self.scale
    }
}

/// Observer that tracks [`EnergyDrift`] while the solver runs.
///
/// Without a tolerance it only watches. With one, it requests
/// [`Action::StopEarly`] at the first sample whose relative deviation exceeds
/// the tolerance.
///
/// Pass `&mut monitor` to the solver to read the summary afterwards.
#[derive(Debug, Clone)]
pub struct EnergyMonitor {
    pendulum: Pendulum,
    tolerance: Option<f64>,
    drift: Option<EnergyDrift>,
}

impl EnergyMonitor {
    #[must_use]
    pub fn new(pendulum: Pendulum) -> Self {
        Self {
            pendulum,
            tolerance: None,
            drift: None,
        }
    }

    /// Stops the run once the relative deviation exceeds `tolerance`.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Summary so far, or `None` before the first event.
    #[must_use]
    pub fn drift(&self) -> Option<&EnergyDrift> {
        self.drift.as_ref()
    }

    /// Whether the tolerance, if any, has been exceeded.
    #[must_use]
    pub fn exceeded(&self) -> bool {
        match (self.tolerance, &self.drift) {
            (Some(tolerance), Some(drift)) => drift.relative_deviation() > tolerance,
            _ => false,
        }
    }
}

impl Observer<Event, Action> for EnergyMonitor {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        match &mut self.drift {
            Some(drift) => drift.record(self.pendulum.energy(event.state)),
            None => self.drift = Some(EnergyDrift::start(&self.pendulum, event.state)),
        }

        self.exceeded().then_some(Action::StopEarly)
    }
}

/// Allows `&mut EnergyMonitor` to be passed to solvers that take an observer
/// by value, so the summary can be read after the solve completes.
impl Observer<Event, Action> for &mut EnergyMonitor {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use pendulum_core::SimulationParameters;

    use crate::transient::semi_implicit_euler::{self, Status};

    fn params(theta0: f64, duration: f64) -> SimulationParameters {
        SimulationParameters::from_si(9.81, 1.0, theta0, 0.0, 0.01, duration).unwrap()
    }

    #[test]
    fn constant_energy_has_no_deviation() {
        let pendulum = Pendulum::new(9.81, 1.0);
        let rest = PendulumState {
            theta: 0.0,
            omega: 0.0,
        };

        let drift = EnergyDrift::from_states(&pendulum, [rest; 4]).unwrap();

        assert_relative_eq!(drift.initial(), -9.81);
        assert_relative_eq!(drift.min(), drift.max());
        assert_eq!(drift.max_deviation(), 0.0);
    }

    #[test]
    fn no_states_no_summary() {
        let pendulum = Pendulum::new(9.81, 1.0);
        assert!(EnergyDrift::from_states(&pendulum, std::iter::empty()).is_none());
    }

    #[test]
    fn energy_stays_in_a_narrow_band() {
        let params = params(0.2, 100.0);
        let pendulum = params.pendulum();
        let solution = semi_implicit_euler::solve_unobserved(&params);

        let drift = EnergyDrift::from_states(&pendulum, solution.states()).unwrap();
        assert!(drift.relative_deviation() < 1e-3);
    }

    #[test]
    fn energy_error_does_not_grow_over_the_horizon() {
        let params = params(0.2, 100.0);
        let pendulum = params.pendulum();
        let solution = semi_implicit_euler::solve_unobserved(&params);
        let initial = pendulum.energy(solution.state(0).unwrap());

        let window = solution.len() / 10;
        let worst = |states: Vec<PendulumState>| {
            states
                .into_iter()
                .map(|s| (pendulum.energy(s) - initial).abs())
                .fold(0.0_f64, f64::max)
        };
        let early = worst(solution.states().take(window).collect());
        let late = worst(solution.states().skip(solution.len() - window).collect());

        assert!(late <= 1.1 * early, "early: {early}, late: {late}");
    }

    #[test]
    fn monitor_matches_summary_of_the_solution() {
        let params = params(0.2, 10.0);
        let mut monitor = EnergyMonitor::new(params.pendulum());

        let solution = semi_implicit_euler::solve(&params, &mut monitor);

        let expected = EnergyDrift::from_states(&params.pendulum(), solution.states()).unwrap();
        assert_eq!(monitor.drift(), Some(&expected));
        assert!(!monitor.exceeded());
    }

    #[test]
    fn monitor_with_tolerance_stops_a_violent_swing() {
        let params = params(2.5, 100.0);
        let mut monitor = EnergyMonitor::new(params.pendulum()).with_tolerance(1e-3);

        let solution = semi_implicit_euler::solve(&params, &mut monitor);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert!(solution.len() < params.time_grid().len());
        assert!(monitor.exceeded());
    }

    #[test]
    fn monitor_with_loose_tolerance_lets_run_complete() {
        let params = params(0.2, 10.0);
        let monitor = EnergyMonitor::new(params.pendulum()).with_tolerance(1e-2);

        let solution = semi_implicit_euler::solve(&params, monitor);

        assert_eq!(solution.status, Status::Complete);
    }
}
