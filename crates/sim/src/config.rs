//! Run configuration.
//!
//! Every field has a default reproducing the reference run, so an empty (or
//! absent) config file is valid. A TOML file can override any subset:
//!
//! ```toml
//! [simulation]
//! g = 9.81        # gravitational acceleration, m/s²
//! L = 1.0         # pendulum length, m
//! theta0 = 0.2    # initial angle, rad
//! omega0 = 0.0    # initial angular velocity, rad/s
//! dt = 0.01       # time step, s
//! T_total = 10.0  # total duration, s
//!
//! [output]
//! dir = "figures_pendulum"
//! plot_file = "pendulum_theta_vs_time.png"
//! animation_file = "pendulum_animation.gif"
//! plot_size = [1600, 800]
//! animation_width = 500
//! animation_title = "Pendulum Animation"
//! animation_grid = true
//! fps = 50
//! frame_stride = 1
//! ```
//!
//! Unknown keys are rejected.

use std::path::{Path, PathBuf};

use pendulum_core::{ParameterError, SimulationParameters};
use serde::Deserialize;

use crate::Error;

/// Complete run configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadConfig`] if the file cannot be read, or
    /// [`Error::ParseConfig`] if it is not valid configuration TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;

        Self::from_toml(&text).map_err(|source| Error::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is malformed or has unknown keys.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Physical and timing inputs, keyed by their conventional symbols.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Gravitational acceleration, m/s².
    pub g: f64,

    /// Pendulum length, m.
    #[serde(rename = "L")]
    pub length: f64,

    /// Initial angle, rad.
    pub theta0: f64,

    /// Initial angular velocity, rad/s.
    pub omega0: f64,

    /// Time step, s.
    pub dt: f64,

    /// Total duration, s.
    #[serde(rename = "T_total")]
    pub total_time: f64,
}

impl SimulationConfig {
    /// Validates the values and converts them into simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] for non-finite or out-of-range values.
    pub fn parameters(&self) -> Result<SimulationParameters, ParameterError> {
        SimulationParameters::from_si(
            self.g,
            self.length,
            self.theta0,
            self.omega0,
            self.dt,
            self.total_time,
        )
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            g: 9.81,
            length: 1.0,
            theta0: 0.2,
            omega0: 0.0,
            dt: 0.01,
            total_time: 10.0,
        }
    }
}

/// Where and how figures are written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory holding every artifact; created if absent.
    pub dir: PathBuf,

    /// File name of the angle-vs-time comparison chart.
    pub plot_file: String,

    /// File name of the swing animation.
    pub animation_file: String,

    /// Chart size in pixels, `[width, height]`.
    pub plot_size: [u32; 2],

    /// Animation width in pixels; the height follows from the view.
    pub animation_width: u32,

    /// Animation caption; empty for none.
    pub animation_title: String,

    /// Draw grid lines and ticks on the animation.
    pub animation_grid: bool,

    /// Animation playback rate.
    pub fps: u32,

    /// Render every n-th sample as an animation frame.
    pub frame_stride: usize,
}

impl OutputConfig {
    #[must_use]
    pub fn plot_path(&self) -> PathBuf {
        self.dir.join(&self.plot_file)
    }

    #[must_use]
    pub fn animation_path(&self) -> PathBuf {
        self.dir.join(&self.animation_file)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("figures_pendulum"),
            plot_file: "pendulum_theta_vs_time.png".into(),
            animation_file: "pendulum_animation.gif".into(),
            plot_size: [1600, 800],
            animation_width: 500,
            animation_title: "Pendulum Animation".into(),
            animation_grid: true,
            fps: 50,
            frame_stride: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_reference_run() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());

        let params = config.simulation.parameters().unwrap();
        assert_eq!(params.step_count(), 1000);
        assert_eq!(
            config.output.plot_path(),
            Path::new("figures_pendulum/pendulum_theta_vs_time.png")
        );
        assert_eq!(
            config.output.animation_path(),
            Path::new("figures_pendulum/pendulum_animation.gif")
        );
    }

    #[test]
    fn overrides_apply_per_key() {
        let config = Config::from_toml(
            r#"
            [simulation]
            L = 2.5
            T_total = 3.0

            [output]
            dir = "out"
            frame_stride = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.length, 2.5);
        assert_eq!(config.simulation.total_time, 3.0);
        assert_eq!(config.simulation.g, 9.81);
        assert_eq!(config.simulation.theta0, 0.2);
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.output.frame_stride, 4);
        assert_eq!(config.output.fps, 50);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("[simulation]\ngravity = 9.81\n").is_err());
        assert!(Config::from_toml("[render]\nfps = 10\n").is_err());
    }

    #[test]
    fn invalid_values_surface_as_parameter_errors() {
        let config = Config::from_toml("[simulation]\ndt = 0.0\n").unwrap();
        assert!(matches!(
            config.simulation.parameters(),
            Err(ParameterError::NonPositive {
                name: "time step",
                ..
            })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("pendulum-sim-no-such-config.toml");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::ReadConfig { .. }));
    }
}
