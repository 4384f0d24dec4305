use std::{io, path::PathBuf};

use pendulum_core::ParameterError;

/// Errors that can occur while configuring or exporting a simulation.
///
/// The computation itself cannot fail; everything here comes from reading
/// configuration or writing output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid simulation parameters")]
    Parameters(#[from] ParameterError),

    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to export figure")]
    Plot(#[from] pendulum_plot::Error),
}
