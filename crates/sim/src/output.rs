//! Writing figures to disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use pendulum_plot::{Animation, LineChart};
use tracing::info;

use crate::{Error, OutputConfig, Results};

/// Paths of the files written by [`export`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub plot: PathBuf,
    pub animation: PathBuf,
    pub frames: usize,
}

/// Writes the comparison chart and then the swing animation.
///
/// The output directory is created first if needed. The first failure stops
/// the export.
///
/// # Errors
///
/// Returns [`Error::CreateDir`] if the directory cannot be created, or
/// [`Error::Plot`] if rendering either figure fails.
pub fn export(results: &Results, output: &OutputConfig) -> Result<Artifacts, Error> {
    let plot = export_plot(results, output)?;
    let (animation, frames) = export_animation(results, output)?;

    Ok(Artifacts {
        plot,
        animation,
        frames,
    })
}

/// Writes the angle-vs-time comparison chart.
///
/// # Errors
///
/// See [`export`].
pub fn export_plot(results: &Results, output: &OutputConfig) -> Result<PathBuf, Error> {
    prepare_dir(&output.dir)?;

    let path = output.plot_path();
    comparison_chart(output).save_png(&path, &results.traces())?;

    info!(path = %path.display(), "saved pendulum comparison plot");
    Ok(path)
}

/// Writes the swing animation of the non-linear solution.
///
/// Returns the path and the number of frames written.
///
/// # Errors
///
/// See [`export`].
pub fn export_animation(
    results: &Results,
    output: &OutputConfig,
) -> Result<(PathBuf, usize), Error> {
    prepare_dir(&output.dir)?;

    let path = output.animation_path();
    let frames =
        swing_animation(output).save_gif(&path, &results.params.pendulum(), &results.theta)?;

    info!(path = %path.display(), frames, "saved pendulum animation GIF");
    Ok((path, frames))
}

/// Creates `dir` and any missing parents.
///
/// # Errors
///
/// Returns [`Error::CreateDir`] if the directory cannot be created.
pub fn prepare_dir(dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_owned(),
        source,
    })
}

fn comparison_chart(output: &OutputConfig) -> LineChart {
    let [width, height] = output.plot_size;
    LineChart::new()
        .title("Pendulum Dynamics")
        .labels("Time [s]", "Angle [rad]")
        .size(width, height)
        .legend()
        .grid()
}

fn swing_animation(output: &OutputConfig) -> Animation {
    let mut animation = Animation::new()
        .width(output.animation_width)
        .fps(output.fps)
        .frame_stride(output.frame_stride);
    if !output.animation_title.is_empty() {
        animation = animation.title(output.animation_title.as_str());
    }
    if output.animation_grid {
        animation = animation.grid();
    }
    animation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_follows_output_size() {
        let output = OutputConfig {
            plot_size: [800, 400],
            ..OutputConfig::default()
        };
        let expected = LineChart::new()
            .title("Pendulum Dynamics")
            .labels("Time [s]", "Angle [rad]")
            .size(800, 400)
            .legend()
            .grid();

        assert_eq!(comparison_chart(&output), expected);
    }

    #[test]
    fn animation_defaults_match_reference_rendering() {
        let animation = swing_animation(&OutputConfig::default());

        assert_eq!(animation.frame_delay_ms(), 20);
        assert_eq!(
            animation,
            Animation::new()
                .width(500)
                .fps(50)
                .title("Pendulum Animation")
                .grid()
        );
    }

    #[test]
    fn bare_animation_when_title_empty_and_grid_off() {
        let output = OutputConfig {
            animation_title: String::new(),
            animation_grid: false,
            frame_stride: 5,
            ..OutputConfig::default()
        };

        assert_eq!(
            swing_animation(&output),
            Animation::new().frame_stride(5)
        );
    }
}
