use std::ops::Index;

/// An ordered, write-once sequence of samples aligned to a [`TimeGrid`].
///
/// A series is built in one go (from a `Vec` or an iterator) by the solver
/// that owns its computation and is read-only afterwards.
///
/// [`TimeGrid`]: crate::TimeGrid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    samples: Box<[f64]>,
}

impl TimeSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.get(index).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.samples.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}

impl From<Vec<f64>> for TimeSeries {
    fn from(samples: Vec<f64>) -> Self {
        Self {
            samples: samples.into_boxed_slice(),
        }
    }
}

impl FromIterator<f64> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl Index<usize> for TimeSeries {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
