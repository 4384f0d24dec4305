//! Core types for the pendulum simulation.
//!
//! This crate defines the shared data model that the solvers and exporters
//! build on:
//!
//! - [`SimulationParameters`]: validated physical and timing inputs
//! - [`TimeGrid`]: the sample times every series is aligned to
//! - [`TimeSeries`]: a write-once sequence of samples on the grid
//! - [`PendulumState`] and [`Pendulum`]: the state and equation of motion
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`StepIntegrable`]: advances a state by one fixed step

mod grid;
mod observer;
mod params;
mod pendulum;
mod series;
mod state;
mod step;

pub use grid::TimeGrid;
pub use observer::Observer;
pub use params::{MAX_STEPS, ParameterError, SimulationParameters};
pub use pendulum::{BobPosition, Pendulum};
pub use series::TimeSeries;
pub use state::{AngularAcceleration, PendulumState};
pub use step::StepIntegrable;
