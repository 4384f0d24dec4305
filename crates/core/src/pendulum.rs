//! The simple gravity pendulum: θ'' + (g/L)·sin θ = 0.

use crate::{AngularAcceleration, PendulumState};

/// Position of the bob relative to the pivot, in m.
///
/// `y` points up, so a bob hanging at rest sits at `(0, -L)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobPosition {
    pub x: f64,
    pub y: f64,
}

/// Equation of motion of a rigid, massless-rod pendulum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pendulum {
    g_over_l: f64,
    length: f64,
}

impl Pendulum {
    /// Creates a pendulum from g/L (1/s²) and rod length (m).
    #[must_use]
    pub fn new(g_over_l: f64, length: f64) -> Self {
        Self { g_over_l, length }
    }

    #[must_use]
    pub fn g_over_l(&self) -> f64 {
        self.g_over_l
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Non-linear angular acceleration −(g/L)·sin θ.
    #[must_use]
    pub fn angular_acceleration(&self, theta: f64) -> AngularAcceleration {
        AngularAcceleration(-self.g_over_l * theta.sin())
    }

    /// Mechanical energy per unit m·L², ½·ω² − (g/L)·cos θ.
    #[must_use]
    pub fn energy(&self, state: PendulumState) -> f64 {
        0.5 * state.omega * state.omega - self.g_over_l * state.theta.cos()
    }

    /// Bob position (L·sin θ, −L·cos θ).
    #[must_use]
    pub fn bob_position(&self, theta: f64) -> BobPosition {
        BobPosition {
            x: self.length * theta.sin(),
            y: -self.length * theta.cos(),
        }
    }
}
