//! Materialized sample sequences.

use std::ops::Index;

/// An ordered sequence of real samples, index-aligned with the [`TimeGrid`]
/// it was produced on.
///
/// Sequences are value objects: they carry no reference to the signal or
/// operation that produced them and are never mutated after creation.
/// Operations always build a new sequence.
///
/// [`TimeGrid`]: crate::TimeGrid
///
/// # Examples
///
/// ```
/// use sigsys::SampledSequence;
///
/// let seq: SampledSequence = vec![0.0, 0.5, 1.0].into();
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq[2], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampledSequence(Vec<f64>);

impl SampledSequence {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterates over the samples by value.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    /// Consumes the sequence and returns the underlying samples.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Smallest and largest sample, `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.iter().fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        })
    }
}

impl From<Vec<f64>> for SampledSequence {
    fn from(samples: Vec<f64>) -> Self {
        Self(samples)
    }
}

impl FromIterator<f64> for SampledSequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl AsRef<[f64]> for SampledSequence {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl Index<usize> for SampledSequence {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a SampledSequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iterator() {
        let seq: SampledSequence = (0..4).map(|i| i as f64).collect();
        assert_eq!(seq.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_range() {
        let seq = SampledSequence::from(vec![0.5, -2.0, 3.0, 1.0]);
        assert_eq!(seq.range(), Some((-2.0, 3.0)));
        assert_eq!(SampledSequence::default().range(), None);
    }

    #[test]
    fn test_iter_reverses() {
        let seq = SampledSequence::from(vec![1.0, 2.0, 3.0]);
        let reversed: Vec<f64> = seq.iter().rev().collect();
        assert_eq!(reversed, vec![3.0, 2.0, 1.0]);
    }
}
