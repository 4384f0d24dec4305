//! Looping GIF animation of the swinging pendulum.

use std::{error::Error as StdError, ops::Range, path::Path};

use pendulum_core::{Pendulum, TimeSeries};
use plotters::{coord::Shift, prelude::*};

use crate::Error;

/// Rod and bob color.
const ROD: RGBColor = RGBColor(31, 119, 180);

/// View extent in rod lengths: x ∈ [−1.2, 1.2], y ∈ [−1.2, 0.2].
const X_EXTENT: (f64, f64) = (-1.2, 1.2);
const Y_EXTENT: (f64, f64) = (-1.2, 0.2);

/// Configuration for a pendulum swing animation.
///
/// Each frame draws the rod from the pivot at the origin to the bob at
/// `(L·sin θ, −L·cos θ)`, with a marker at both ends. The image height follows
/// from the width, and the view is widened along one axis to fill whatever
/// plotting area is left after the title and labels, so x and y share one
/// scale and the bob's path stays circular.
///
/// Construct with [`Animation::new`] and chain builder methods as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    title: Option<String>,
    width: u32,
    fps: u32,
    frame_stride: usize,
    grid: bool,
}

impl Animation {
    /// Creates an animation with defaults: no title, 500 px wide, 50 fps,
    /// every sample rendered, no grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            width: 500,
            fps: 50,
            frame_stride: 1,
            grid: false,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the image width in pixels.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width.max(1);
        self
    }

    /// Sets the playback rate in frames per second.
    #[must_use]
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Renders every `stride`-th sample as a frame.
    #[must_use]
    pub fn frame_stride(mut self, stride: usize) -> Self {
        self.frame_stride = stride.max(1);
        self
    }

    /// Enables grid lines and axis ticks.
    #[must_use]
    pub fn grid(mut self) -> Self {
        self.grid = true;
        self
    }

    /// Delay between frames in milliseconds.
    #[must_use]
    pub fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps
    }

    /// Image size in pixels, with the height matched to the view's aspect.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn size(&self) -> (u32, u32) {
        let aspect = (Y_EXTENT.1 - Y_EXTENT.0) / (X_EXTENT.1 - X_EXTENT.0);
        let height = (f64::from(self.width) * aspect).round().max(1.0) as u32;
        (self.width, height)
    }

    /// Sample indices that become frames, in playback order.
    pub fn frame_indices(&self, samples: usize) -> impl Iterator<Item = usize> + use<> {
        (0..samples).step_by(self.frame_stride)
    }

    /// Renders the swing described by `theta` to a GIF file at `path`.
    ///
    /// The GIF loops forever. Returns the number of frames written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFrames`] if `theta` is empty, or [`Error::Render`]
    /// if drawing or writing the file fails.
    pub fn save_gif(
        &self,
        path: impl AsRef<Path>,
        pendulum: &Pendulum,
        theta: &TimeSeries,
    ) -> Result<usize, Error> {
        let path = path.as_ref();
        if theta.is_empty() {
            return Err(Error::NoFrames);
        }

        let frames = self
            .draw(path, pendulum, theta)
            .map_err(|source| Error::render(path, source))?;

        tracing::debug!(path = %path.display(), frames, "rendered animation");
        Ok(frames)
    }

    fn draw(
        &self,
        path: &Path,
        pendulum: &Pendulum,
        theta: &TimeSeries,
    ) -> Result<usize, Box<dyn StdError + Send + Sync>> {
        let root = BitMapBackend::gif(path, self.size(), self.frame_delay_ms())?
            .into_drawing_area();
        let (x_range, y_range) = self.view(&root, pendulum.length())?;

        let mut frames = 0;
        for index in self.frame_indices(theta.len()) {
            let bob = pendulum.bob_position(theta[index]);
            root.fill(&WHITE)?;

            let mut chart = self
                .chart_builder(&root)
                .build_cartesian_2d(x_range.clone(), y_range.clone())?;

            if self.grid {
                chart.configure_mesh().draw()?;
            }

            let ends = [(0.0, 0.0), (bob.x, bob.y)];
            chart.draw_series(LineSeries::new(ends, ROD.stroke_width(3)))?;
            chart.draw_series(ends.map(|end| Circle::new(end, 6, ROD.filled())))?;

            root.present()?;
            frames += 1;
        }

        Ok(frames)
    }

    fn chart_builder<'a, 'b, 'c>(
        &self,
        root: &'a DrawingArea<BitMapBackend<'c>, Shift>,
    ) -> ChartBuilder<'a, 'b, BitMapBackend<'c>> {
        let mut builder = ChartBuilder::on(root);
        builder.margin(10);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 24));
        }
        if self.grid {
            builder.x_label_area_size(30).y_label_area_size(40);
        }
        builder
    }

    /// Data ranges covering the swing of a rod of `length`, fitted to the
    /// plotting area this layout leaves on `root`.
    fn view(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        length: f64,
    ) -> Result<(Range<f64>, Range<f64>), Box<dyn StdError + Send + Sync>> {
        let x_range = scaled(X_EXTENT, length);
        let y_range = scaled(Y_EXTENT, length);

        let chart = self
            .chart_builder(root)
            .build_cartesian_2d(x_range.clone(), y_range.clone())?;
        let (x_px, y_px) = chart.plotting_area().get_pixel_range();

        Ok(equal_scale(
            x_range,
            y_range,
            f64::from(x_px.end - x_px.start),
            f64::from(y_px.end - y_px.start),
        ))
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

fn scaled((low, high): (f64, f64), length: f64) -> Range<f64> {
    (low * length)..(high * length)
}

/// Widens one of the ranges about its midpoint so a `width × height` pixel
/// area shows both at the same pixels per unit.
fn equal_scale(
    x: Range<f64>,
    y: Range<f64>,
    width: f64,
    height: f64,
) -> (Range<f64>, Range<f64>) {
    if width <= 0.0 || height <= 0.0 {
        return (x, y);
    }
    let scale = (width / (x.end - x.start)).min(height / (y.end - y.start));
    (widened(x, width / scale), widened(y, height / scale))
}

fn widened(range: Range<f64>, span: f64) -> Range<f64> {
    let mid = 0.5 * (range.start + range.end);
    (mid - 0.5 * span)..(mid + 0.5 * span)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{fs, path::PathBuf};

    use approx::assert_relative_eq;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pendulum-plot-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn default_playback_is_fifty_fps() {
        let animation = Animation::new();
        assert_eq!(animation.frame_delay_ms(), 20);
        assert_eq!(animation.size(), (500, 292));
    }

    #[test]
    fn stride_selects_every_nth_sample() {
        let animation = Animation::new().frame_stride(3);
        let indices: Vec<usize> = animation.frame_indices(10).collect();
        assert_eq!(indices, vec![0, 3, 6, 9]);
    }

    #[test]
    fn zero_stride_and_fps_are_clamped() {
        let animation = Animation::new().frame_stride(0).fps(0);
        assert_eq!(animation.frame_indices(3).count(), 3);
        assert_eq!(animation.frame_delay_ms(), 1000);
    }

    #[test]
    fn view_scales_with_rod_length() {
        let x = scaled(X_EXTENT, 2.0);
        assert_relative_eq!(x.start, -2.4);
        assert_relative_eq!(x.end, 2.4);
    }

    #[test]
    fn equal_scale_widens_the_cramped_axis() {
        let (x, y) = equal_scale(-1.0..1.0, -1.0..0.0, 200.0, 50.0);
        assert_relative_eq!(x.start, -2.0);
        assert_relative_eq!(x.end, 2.0);
        assert_relative_eq!(y.start, -1.0);
        assert_relative_eq!(y.end, 0.0);

        let (x, y) = equal_scale(-1.0..1.0, -1.0..0.0, 100.0, 100.0);
        assert_relative_eq!(x.end - x.start, 2.0);
        assert_relative_eq!(y.start, -1.5);
        assert_relative_eq!(y.end, 0.5);
    }

    #[test]
    fn titled_grid_layout_keeps_both_axes_at_one_scale() {
        let animation = Animation::new().title("Pendulum Animation").grid();
        let (width, height) = animation.size();
        let mut buffer = vec![0_u8; (width * height * 3) as usize];
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();

        let (x, y) = animation.view(&root, 1.0).expect("layout should build");
        assert!(x.start <= -1.2 && x.end >= 1.2);
        assert!(y.start <= -1.2 && y.end >= 0.2);

        let chart = animation
            .chart_builder(&root)
            .build_cartesian_2d(x.clone(), y.clone())
            .expect("layout should build");
        let (x_px, y_px) = chart.plotting_area().get_pixel_range();
        let x_scale = f64::from(x_px.end - x_px.start) / (x.end - x.start);
        let y_scale = f64::from(y_px.end - y_px.start) / (y.end - y.start);

        assert_relative_eq!(x_scale, y_scale, max_relative = 1e-9);
    }

    #[test]
    fn empty_series_has_no_frames() {
        let path = scratch_path("empty.gif");
        let err = Animation::new()
            .save_gif(&path, &Pendulum::new(9.81, 1.0), &TimeSeries::default())
            .unwrap_err();

        assert!(matches!(err, Error::NoFrames));
        assert!(!path.exists());
    }

    #[test]
    fn writes_a_gif_with_one_frame_per_selected_sample() {
        let path = scratch_path("swing.gif");
        let theta: TimeSeries = (0..10).map(|i| 0.2 * f64::from(i).cos()).collect();

        let frames = Animation::new()
            .width(60)
            .frame_stride(2)
            .save_gif(&path, &Pendulum::new(9.81, 1.0), &theta)
            .expect("animation should render");

        assert_eq!(frames, 5);
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], b"GIF");
    }
}
