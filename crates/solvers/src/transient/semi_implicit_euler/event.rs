use pendulum_core::PendulumState;

/// Event emitted by the solver for each grid sample.
///
/// Step 0 is the initial condition. Steps 1..N are emitted after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Grid index of this sample.
    pub step: usize,

    /// Grid time of this sample, in s.
    pub time: f64,

    /// Pendulum state at this sample.
    pub state: PendulumState,
}
