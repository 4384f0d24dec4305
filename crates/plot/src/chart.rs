//! Static line charts rendered to PNG.

use std::{error::Error as StdError, path::Path};

use plotters::prelude::*;

use crate::{Bounds, Error, Trace};

/// Configuration for a static line chart.
///
/// Construct with [`LineChart::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// LineChart::new()
///     .title("Pendulum Dynamics")
///     .labels("Time [s]", "Angle [rad]")
///     .legend()
///     .grid()
///     .save_png("theta.png", &traces)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    title: Option<String>,
    x_label: String,
    y_label: String,
    size: (u32, u32),
    legend: bool,
    grid: bool,
}

impl LineChart {
    /// Creates a chart with defaults: no title or axis labels, 1600×800 px,
    /// no legend, no grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_label: String::new(),
            y_label: String::new(),
            size: (1600, 800),
            legend: false,
            grid: false,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x and y axis descriptions.
    #[must_use]
    pub fn labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Sets the image size in pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables background grid lines.
    #[must_use]
    pub fn grid(mut self) -> Self {
        self.grid = true;
        self
    }

    /// Renders `traces` to a PNG file at `path`, overwriting it.
    ///
    /// Traces are drawn in order with distinct colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyChart`] if no trace has any points, or
    /// [`Error::Render`] if drawing or writing the image fails.
    pub fn save_png(&self, path: impl AsRef<Path>, traces: &[Trace]) -> Result<(), Error> {
        let path = path.as_ref();
        let bounds = Bounds::covering(traces).ok_or(Error::EmptyChart)?;

        self.draw(path, traces, bounds)
            .map_err(|source| Error::render(path, source))?;

        tracing::debug!(path = %path.display(), traces = traces.len(), "rendered line chart");
        Ok(())
    }

    fn draw(
        &self,
        path: &Path,
        traces: &[Trace],
        bounds: Bounds,
    ) -> Result<(), Box<dyn StdError + Send + Sync>> {
        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(24)
            .x_label_area_size(70)
            .y_label_area_size(90);
        if let Some(title) = &self.title {
            builder.caption(title, ("sans-serif", 40));
        }
        let mut chart = builder.build_cartesian_2d(bounds.x, bounds.y)?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .axis_desc_style(("sans-serif", 30))
            .label_style(("sans-serif", 24));
        if !self.grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        for (index, trace) in traces.iter().enumerate() {
            let color = Palette99::pick(index).to_rgba();
            chart
                .draw_series(LineSeries::new(
                    trace.points().iter().map(|&[x, y]| (x, y)),
                    color.stroke_width(3),
                ))?
                .label(trace.name())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(3))
                });
        }

        if self.legend {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .label_font(("sans-serif", 24))
                .draw()?;
        }

        root.present()?;
        Ok(())
    }
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}
