use crate::StepIntegrable;

/// Angular displacement and velocity of the pendulum at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    /// Angle from the downward vertical, in rad.
    pub theta: f64,

    /// Angular velocity, in rad/s.
    pub omega: f64,
}

/// Angular acceleration of the pendulum, in rad/s².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularAcceleration(pub f64);

/// Semi-implicit (symplectic) Euler step.
///
/// ```text
/// omega' = omega + alpha * dt
/// theta' = theta + omega' * dt
/// ```
///
/// The velocity is updated first from an acceleration evaluated at the old
/// angle, and the angle then moves with the new velocity. Swapping the two
/// lines turns this into forward Euler, which gains energy every step.
impl StepIntegrable<f64> for PendulumState {
    type Derivative = AngularAcceleration;

    fn step(&self, derivative: AngularAcceleration, dt: f64) -> Self {
        let omega = self.omega + derivative.0 * dt;
        let theta = self.theta + omega * dt;
        Self { theta, omega }
    }
}
