use std::ops::Range;

use pendulum_core::{TimeGrid, TimeSeries};

/// A named sequence of `(x, y)` points drawn as one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    name: String,
    points: Vec<[f64; 2]>,
}

impl Trace {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Pairs each sample of `series` with its grid time.
    ///
    /// Extra samples on either side are ignored.
    #[must_use]
    pub fn from_series(name: impl Into<String>, grid: &TimeGrid, series: &TimeSeries) -> Self {
        let points = grid.iter().zip(series.iter()).map(|(t, y)| [t, y]).collect();
        Self::new(name, points)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Axis ranges covering a set of traces.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl Bounds {
    /// Smallest ranges holding every point, with 5% headroom on y.
    ///
    /// A zero-width range is widened to one unit so the axis stays drawable.
    /// Returns `None` when there are no points at all.
    #[must_use]
    pub fn covering(traces: &[Trace]) -> Option<Self> {
        let mut points = traces.iter().flat_map(|trace| trace.points.iter());
        let &[x, y] = points.next()?;
        let (mut x_min, mut x_max, mut y_min, mut y_max) = (x, x, y, y);

        for &[x, y] in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        if x_max <= x_min {
            x_max = x_min + 1.0;
        }
        let y_pad = if y_max > y_min {
            0.05 * (y_max - y_min)
        } else {
            0.5
        };

        Some(Self {
            x: x_min..x_max,
            y: (y_min - y_pad)..(y_max + y_pad),
        })
    }
}
