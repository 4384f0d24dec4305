//! Semi-implicit (symplectic) Euler solver for the non-linear pendulum.
//!
//! Each step updates the angular velocity from the acceleration at the
//! previous angle, then advances the angle with the new velocity:
//!
//! ```text
//! omega[i] = omega[i-1] - (g/L) * sin(theta[i-1]) * dt
//! theta[i] = theta[i-1] + omega[i] * dt
//! ```
//!
//! The scheme is first-order accurate. Being symplectic, its energy error
//! oscillates within a band instead of growing, but the band widens and the
//! phase error grows as `dt * sqrt(g/L)` increases. Steps are strictly
//! sequential.
//!
//! # Example
//!
//! ```
//! use pendulum_core::SimulationParameters;
//! use pendulum_solvers::transient::semi_implicit_euler;
//!
//! let params = SimulationParameters::from_si(9.81, 1.0, 0.2, 0.0, 0.01, 10.0)?;
//! let solution = semi_implicit_euler::solve_unobserved(&params);
//!
//! assert_eq!(solution.theta.len(), 1000);
//! assert_eq!(solution.theta[0], 0.2);
//! # Ok::<(), pendulum_core::ParameterError>(())
//! ```

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use pendulum_core::{Observer, SimulationParameters, StepIntegrable};
use uom::si::time::second;

/// Integrates the non-linear pendulum over the parameters' time grid.
///
/// # Algorithm
///
/// 1. Record the initial condition as sample 0 and emit its event.
/// 2. For each remaining grid index:
///    - Evaluate the angular acceleration at the previous angle.
///    - Step the state (velocity first, then angle).
///    - Record the new sample and emit an [`Event`].
///    - If the observer returns [`Action::StopEarly`], terminate.
/// 3. Return the solution with both series.
///
/// A grid with a single sample (duration shorter than one time step) never
/// enters the update loop and yields only the initial condition.
///
/// The update uses the configured time step `dt`, which is also the nominal
/// grid spacing.
pub fn solve<Obs>(params: &SimulationParameters, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let grid = params.time_grid();
    let pendulum = params.pendulum();
    let dt = params.time_step().get::<second>();

    let mut theta = Vec::with_capacity(grid.len());
    let mut omega = Vec::with_capacity(grid.len());

    let mut current = params.initial_state();
    theta.push(current.theta);
    omega.push(current.omega);

    let event = Event {
        step: 0,
        time: grid.time(0),
        state: current,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return finish(Status::StoppedByObserver, theta, omega, 0);
    }

    for step in 1..grid.len() {
        let acceleration = pendulum.angular_acceleration(current.theta);
        let next = current.step(acceleration, dt);

        theta.push(next.theta);
        omega.push(next.omega);

        let event = Event {
            step,
            time: grid.time(step),
            state: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(Status::StoppedByObserver, theta, omega, step);
        }

        current = next;
    }

    let steps = theta.len() - 1;
    finish(Status::Complete, theta, omega, steps)
}

/// Integrates the non-linear pendulum without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
#[must_use]
pub fn solve_unobserved(params: &SimulationParameters) -> Solution {
    solve(params, ())
}

fn finish(status: Status, theta: Vec<f64>, omega: Vec<f64>, steps: usize) -> Solution {
    Solution {
        status,
        theta: theta.into(),
        omega: omega.into(),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{compare, small_angle};

    fn reference() -> SimulationParameters {
        SimulationParameters::from_si(9.81, 1.0, 0.2, 0.0, 0.01, 10.0).unwrap()
    }

    #[test]
    fn reference_run_fills_the_grid() {
        let params = reference();
        let solution = solve_unobserved(&params);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.theta.len(), 1000);
        assert_eq!(solution.omega.len(), 1000);
        assert_eq!(solution.steps, 999);
        assert_eq!(solution.theta.len(), small_angle::solve(&params).len());
    }

    #[test]
    fn first_sample_is_initial_condition() {
        let params = SimulationParameters::from_si(9.81, 1.0, 0.3, -0.7, 0.01, 1.0).unwrap();
        let solution = solve_unobserved(&params);

        assert_eq!(solution.theta[0], 0.3);
        assert_eq!(solution.omega[0], -0.7);
    }

    #[test]
    fn follows_the_recurrence_in_order() {
        let params = SimulationParameters::from_si(9.81, 1.0, 0.2, 0.0, 0.01, 0.03).unwrap();
        let solution = solve_unobserved(&params);
        let (g_over_l, dt) = (9.81, 0.01);

        let omega1 = 0.0 - g_over_l * 0.2_f64.sin() * dt;
        let theta1 = 0.2 + omega1 * dt;
        let omega2 = omega1 - g_over_l * theta1.sin() * dt;
        let theta2 = theta1 + omega2 * dt;

        assert_eq!(solution.theta.len(), 3);
        assert_eq!(solution.omega[1], omega1);
        assert_eq!(solution.theta[1], theta1);
        assert_eq!(solution.omega[2], omega2);
        assert_eq!(solution.theta[2], theta2);
    }

    #[test]
    fn differs_from_small_angle_solution_by_bounded_amount() {
        let params = reference();
        let linear = small_angle::solve(&params);
        let solution = solve_unobserved(&params);

        let divergence = compare::max_abs_difference(&linear, &solution.theta);
        assert!(divergence > 1e-3, "solutions too close: {divergence}");
        assert!(divergence < 0.1, "solutions too far apart: {divergence}");
    }

    #[test]
    fn amplitude_stays_near_initial_angle() {
        let solution = solve_unobserved(&reference());
        let peak = solution.theta.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
        assert_relative_eq!(peak, 0.2, max_relative = 0.02);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let params = reference();
        let first = solve_unobserved(&params);
        let again = solve_unobserved(&params);

        let bits = |s: &Solution| -> Vec<(u64, u64)> {
            s.states()
                .map(|state| (state.theta.to_bits(), state.omega.to_bits()))
                .collect()
        };
        assert_eq!(bits(&first), bits(&again));
    }

    #[test]
    fn duration_below_step_returns_initial_condition_only() {
        let params = SimulationParameters::from_si(9.81, 1.0, 0.2, 0.1, 0.01, 0.005).unwrap();
        let solution = solve_unobserved(&params);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.theta.as_slice(), &[0.2]);
        assert_eq!(solution.omega.as_slice(), &[0.1]);
    }

    #[test]
    fn single_step_duration_returns_initial_condition_only() {
        let params = SimulationParameters::from_si(9.81, 1.0, 0.2, 0.0, 0.01, 0.01).unwrap();
        let solution = solve_unobserved(&params);

        assert_eq!(solution.len(), 1);
        assert_eq!(solution.state(0).unwrap().theta, 0.2);
    }

    #[test]
    fn observer_can_stop_early() {
        let params = reference();
        let observer = |event: &Event| (event.step >= 5).then_some(Action::StopEarly);

        let solution = solve(&params, observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.theta.len(), 6);
        assert_eq!(solution.omega.len(), 6);
    }

    #[test]
    fn observer_stopping_at_start_keeps_initial_sample() {
        let solution = solve(&reference(), |_: &Event| Some(Action::StopEarly));

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.theta.as_slice(), &[0.2]);
    }

    #[test]
    fn events_carry_grid_times_and_recorded_states() {
        let params = SimulationParameters::from_si(9.81, 1.0, 0.2, 0.0, 0.25, 1.0).unwrap();

        let mut events = Vec::new();
        let solution = solve(&params, |event: &Event| {
            events.push(*event);
            None
        });

        let steps: Vec<usize> = events.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3]);

        for (event, state) in events.iter().zip(solution.states()) {
            assert_relative_eq!(event.time, 0.25 * f64::from(u32::try_from(event.step).unwrap()));
            assert_eq!(event.state, state);
        }
    }
}
