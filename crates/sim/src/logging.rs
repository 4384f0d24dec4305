use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,pendulum=info,pendulum_sim=info,pendulum_plot=info";

/// Initializes logging to stderr.
///
/// Use the `RUST_LOG` environment variable to override the default filter,
/// e.g. `RUST_LOG=pendulum_plot=debug` to see per-file render details.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
