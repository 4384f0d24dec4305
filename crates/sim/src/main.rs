//! Simulates a simple gravity pendulum and writes two figures:
//!
//! - the small-angle and non-linear angle curves against time (PNG)
//! - an animation of the non-linear swing (looping GIF)
//!
//! # Usage
//!
//! ```text
//! pendulum
//! pendulum --config pendulum.toml
//! pendulum --output-dir figures
//! pendulum --show            # with `--features viewer`
//! ```
//!
//! Without arguments this runs the reference case (g = 9.81, L = 1, θ₀ = 0.2,
//! dt = 0.01, 10 s) into `figures_pendulum/`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pendulum_sim::{Config, export, logging, simulate};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pendulum")]
#[command(about = "Compare small-angle and non-linear pendulum motion")]
struct Cli {
    /// TOML file overriding the default parameters and output settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the figures (overrides `output.dir`)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Open an interactive window with both curves after exporting
    #[cfg(feature = "viewer")]
    #[arg(long)]
    show: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }

    let params = config
        .simulation
        .parameters()
        .context("invalid simulation parameters")?;
    info!(
        steps = params.step_count(),
        dt = config.simulation.dt,
        duration = config.simulation.total_time,
        "starting simulation"
    );

    let results = simulate(&params);
    let artifacts = export(&results, &config.output)?;
    info!(
        plot = %artifacts.plot.display(),
        animation = %artifacts.animation.display(),
        "done"
    );

    #[cfg(feature = "viewer")]
    if cli.show {
        use pendulum_plot::ShowConfig;

        pendulum_plot::show(
            results.traces(),
            ShowConfig::new()
                .title("Pendulum Dynamics")
                .labels("Time [s]", "Angle [rad]")
                .legend(),
        )
        .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))?;
    }

    Ok(())
}
