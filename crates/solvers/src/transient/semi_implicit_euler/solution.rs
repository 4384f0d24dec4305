use pendulum_core::{PendulumState, TimeSeries};

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every grid sample was computed.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a semi-implicit Euler integration.
///
/// `theta` and `omega` always have the same length. For a complete run that
/// length equals the grid length; an early stop keeps the samples up to and
/// including the step at which the observer acted.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Angle samples, in rad.
    pub theta: TimeSeries,

    /// Angular velocity samples, in rad/s.
    pub omega: TimeSeries,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// Number of samples held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    /// Returns the state at sample `index`, if present.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<PendulumState> {
        Some(PendulumState {
            theta: self.theta.get(index)?,
            omega: self.omega.get(index)?,
        })
    }

    /// Iterates over the states in grid order.
    pub fn states(&self) -> impl Iterator<Item = PendulumState> + '_ {
        self.theta
            .iter()
            .zip(self.omega.iter())
            .map(|(theta, omega)| PendulumState { theta, omega })
    }
}
