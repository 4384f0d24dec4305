//! Fixed-step integrators for the non-linear pendulum.
//!
//! - [`semi_implicit_euler`]: symplectic Euler, velocity first then position

pub mod semi_implicit_euler;
