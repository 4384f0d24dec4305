//! Pendulum simulation pipeline.
//!
//! Loads a [`Config`], computes the small-angle and non-linear solutions with
//! [`simulate`], and writes the comparison chart and swing animation with
//! [`export`]. Every series is computed before anything is written.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;

pub use config::{Config, OutputConfig, SimulationConfig};
pub use error::Error;
pub use output::{Artifacts, export};
pub use pipeline::{Results, simulate};
