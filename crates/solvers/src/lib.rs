//! Solvers for the simple gravity pendulum.
//!
//! # Modules
//!
//! - [`small_angle`]: closed-form solution of the linearized equation
//! - [`transient`]: step-by-step integration of the full non-linear equation
//! - [`energy`]: mechanical energy drift, as a summary or a live observer
//! - [`compare`]: divergence between two aligned series

pub mod compare;
pub mod energy;
pub mod small_angle;
pub mod transient;
