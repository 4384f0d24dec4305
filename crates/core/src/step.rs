/// A state that can be advanced by one fixed step given its derivative.
///
/// Fixed-step solvers call [`step`](StepIntegrable::step) once per grid
/// interval. How the derivative is applied is up to the implementor: a plain
/// explicit scheme adds `derivative * delta` to every component, while a
/// semi-implicit scheme (see [`PendulumState`](crate::PendulumState)) updates
/// the velocity first and moves the position with the new velocity.
///
/// `Delta` is usually the time step in seconds.
pub trait StepIntegrable<Delta> {
    /// The derivative driving the step.
    type Derivative;

    /// Returns the state after one step of size `delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}
