use std::f64::consts::TAU;

use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared,
    angle::radian,
    angular_velocity::radian_per_second,
    f64::{Acceleration, Angle, AngularVelocity, Length, Time},
    length::meter,
    time::second,
};

use crate::{Pendulum, PendulumState, TimeGrid};

/// Reasons a set of simulation parameters is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("duration must not be negative, got {value} s")]
    NegativeDuration { value: f64 },

    #[error("duration / time step gives {steps} steps, more than the limit of {max}")]
    TooManySteps { steps: f64, max: usize },
}

/// Largest step count a run may request.
///
/// Each step stores two `f64` samples per series, so this keeps a run well
/// inside addressable memory on every target.
pub const MAX_STEPS: usize = 100_000_000;

/// Physical and timing inputs for one simulation run.
///
/// Values are held as dimensioned quantities and validated on construction:
/// all must be finite, gravity, length, and time step must be positive, and
/// the duration must not be negative. The step count must not exceed
/// [`MAX_STEPS`]. Once built, the parameters never change.
///
/// The step count is `floor(duration / time_step)` and the grid spacing is
/// `duration / step_count`, so the spacing can differ slightly from the time
/// step when the duration is not an exact multiple of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    gravity: Acceleration,
    length: Length,
    initial_angle: Angle,
    initial_angular_velocity: AngularVelocity,
    time_step: Time,
    duration: Time,
}

impl SimulationParameters {
    /// Creates validated parameters from dimensioned quantities.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if any value is not finite, if gravity,
    /// length, or time step is not positive, if the duration is negative, or
    /// if the duration holds more than [`MAX_STEPS`] time steps.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        gravity: Acceleration,
        length: Length,
        initial_angle: Angle,
        initial_angular_velocity: AngularVelocity,
        time_step: Time,
        duration: Time,
    ) -> Result<Self, ParameterError> {
        finite("gravity", gravity.value)?;
        finite("length", length.value)?;
        finite("initial angle", initial_angle.value)?;
        finite("initial angular velocity", initial_angular_velocity.value)?;
        finite("time step", time_step.value)?;
        finite("duration", duration.value)?;

        positive("gravity", gravity.value)?;
        positive("length", length.value)?;
        positive("time step", time_step.value)?;

        if duration.value < 0.0 {
            return Err(ParameterError::NegativeDuration {
                value: duration.value,
            });
        }

        let steps = (duration.value / time_step.value).floor();
        if steps > MAX_STEPS as f64 {
            return Err(ParameterError::TooManySteps {
                steps,
                max: MAX_STEPS,
            });
        }

        Ok(Self {
            gravity,
            length,
            initial_angle,
            initial_angular_velocity,
            time_step,
            duration,
        })
    }

    /// Creates validated parameters from plain SI values.
    ///
    /// Units: gravity in m/s², length in m, angle in rad, angular velocity in
    /// rad/s, time step and duration in s.
    ///
    /// # Errors
    ///
    /// See [`SimulationParameters::new`].
    pub fn from_si(
        gravity: f64,
        length: f64,
        initial_angle: f64,
        initial_angular_velocity: f64,
        time_step: f64,
        duration: f64,
    ) -> Result<Self, ParameterError> {
        Self::new(
            Acceleration::new::<meter_per_second_squared>(gravity),
            Length::new::<meter>(length),
            Angle::new::<radian>(initial_angle),
            AngularVelocity::new::<radian_per_second>(initial_angular_velocity),
            Time::new::<second>(time_step),
            Time::new::<second>(duration),
        )
    }

    #[must_use]
    pub fn gravity(&self) -> Acceleration {
        self.gravity
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn initial_angle(&self) -> Angle {
        self.initial_angle
    }

    #[must_use]
    pub fn initial_angular_velocity(&self) -> AngularVelocity {
        self.initial_angular_velocity
    }

    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step
    }

    #[must_use]
    pub fn duration(&self) -> Time {
        self.duration
    }

    /// Returns g/L in 1/s².
    #[must_use]
    pub fn g_over_l(&self) -> f64 {
        self.gravity.get::<meter_per_second_squared>() / self.length.get::<meter>()
    }

    /// Returns the small-angle natural frequency √(g/L) in rad/s.
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        self.g_over_l().sqrt()
    }

    /// Returns the small-angle period 2π/√(g/L).
    #[must_use]
    pub fn small_angle_period(&self) -> Time {
        Time::new::<second>(TAU / self.natural_frequency())
    }

    /// Returns the number of grid samples requested, `floor(duration / dt)`.
    ///
    /// This is zero when the duration is shorter than one time step and never
    /// exceeds [`MAX_STEPS`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step_count(&self) -> usize {
        (self.duration.get::<second>() / self.time_step.get::<second>()).floor() as usize
    }

    /// Returns the time grid every series of this run is aligned to.
    ///
    /// With a step count `N ≥ 1` the grid has `N` samples at `i · (T / N)`.
    /// With `N = 0` it holds the single initial sample at `t = 0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_grid(&self) -> TimeGrid {
        match self.step_count() {
            0 => TimeGrid::new(1, self.time_step.get::<second>()),
            n => TimeGrid::new(n, self.duration.get::<second>() / n as f64),
        }
    }

    /// Returns the state at `t = 0`.
    #[must_use]
    pub fn initial_state(&self) -> PendulumState {
        PendulumState {
            theta: self.initial_angle.get::<radian>(),
            omega: self.initial_angular_velocity.get::<radian_per_second>(),
        }
    }

    /// Returns the equation of motion for these parameters.
    #[must_use]
    pub fn pendulum(&self) -> Pendulum {
        Pendulum::new(self.g_over_l(), self.length.get::<meter>())
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositive { name, value })
    }
}
