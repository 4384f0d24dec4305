/// Uniformly spaced sample times starting at `t = 0`.
///
/// Sample `i` sits at `i * spacing` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    len: usize,
    spacing: f64,
}

impl TimeGrid {
    /// Creates a grid of `len` samples separated by `spacing` seconds.
    #[must_use]
    pub fn new(len: usize, spacing: f64) -> Self {
        Self { len, spacing }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance between consecutive samples, in seconds.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Time of sample `index`, in seconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.spacing
    }

    /// Time of the last sample, or `None` for an empty grid.
    #[must_use]
    pub fn end(&self) -> Option<f64> {
        self.len.checked_sub(1).map(|last| self.time(last))
    }

    /// Iterates over the sample times in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + use<> {
        let grid = *self;
        (0..grid.len).map(move |i| grid.time(i))
    }
}
