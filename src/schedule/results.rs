//! The growing sequence of statistics a run produces

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::statistics::SamplingSummary;

/// Append-only sequence of per-step statistics
///
/// Its length is the run's progress counter; there is no separate count
/// that could drift from what is stored. Only the scheduler appends, and only
/// finite statistics. A [`SamplingSummary`] of the stored values is kept
/// alongside so a consumer can watch the sampling distribution settle.
///
/// # Example
///
/// ```
/// use livesample::ResultSequence;
///
/// let results = ResultSequence::new();
/// assert!(results.is_empty());
/// assert_eq!(results.summary().count(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSequence {
    values: Vec<f64>,
    summary: SamplingSummary,
}

impl ResultSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statistics computed so far
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Summary of every stored statistic; its count always equals [`len`](Self::len)
    pub fn summary(&self) -> &SamplingSummary {
        &self.summary
    }

    /// Drop every stored statistic
    pub fn clear(&mut self) {
        self.values.clear();
        self.summary.clear();
    }

    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
        self.summary.push(value);
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl<'a> IntoIterator for &'a ResultSequence {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl AsRef<[f64]> for ResultSequence {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResultSequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let range = self.summary.range();
        let mut state = serializer.serialize_struct("ResultSequence", 6)?;
        state.serialize_field("values", &self.values)?;
        state.serialize_field("mean", &self.summary.mean())?;
        state.serialize_field("stddev", &self.summary.stddev())?;
        state.serialize_field("min", &range.map(|(lo, _)| lo))?;
        state.serialize_field("max", &range.map(|(_, hi)| hi))?;
        state.serialize_field("count", &self.values.len())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tracks_summary() {
        let mut results = ResultSequence::new();
        results.push(1.0);
        results.push(3.0);

        assert_eq!(results.len(), 2);
        assert_eq!(results.as_slice(), &[1.0, 3.0]);
        assert_eq!(results.last(), Some(3.0));
        assert_eq!(results.summary().count(), 2);
        assert_eq!(results.summary().mean(), Some(2.0));
        assert_eq!(results.summary().range(), Some((1.0, 3.0)));
    }

    #[test]
    fn test_clear_resets_summary() {
        let mut results = ResultSequence::new();
        results.push(5.0);
        results.clear();

        assert!(results.is_empty());
        assert!(results.summary().is_empty());
        assert_eq!(results, ResultSequence::new());
    }
}
