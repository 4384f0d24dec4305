//! Rendering for pendulum simulations.
//!
//! # Modules
//!
//! - [`Trace`]: a named sequence of `(x, y)` points
//! - [`LineChart`]: static PNG line chart of one or more traces
//! - [`Animation`]: looping GIF of the pendulum swinging
//!
//! # Features
//!
//! - `viewer`: Enables [`show`] for inspecting traces in an interactive egui
//!   window. This feature adds dependencies on `eframe` and `egui_plot`.

mod animation;
mod chart;
mod error;
mod trace;

#[cfg(feature = "viewer")]
mod viewer;

pub use animation::Animation;
pub use chart::LineChart;
pub use error::Error;
pub use trace::{Bounds, Trace};

#[cfg(feature = "viewer")]
pub use viewer::{ShowConfig, show};
