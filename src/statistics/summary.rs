//! Summary of the sampling distribution a run has built so far

use crate::math;

/// Mean, spread and range of the statistics a run has appended
///
/// Updated in O(1) per statistic with Welford's recurrence, so the mean of
/// means and its spread can be read at any point of a run without scanning
/// the sequence. Every accessor is `None` until a statistic arrives.
///
/// # Example
///
/// ```
/// use livesample::statistics::{Mean, SamplingSummary};
/// use livesample::traits::Reducer;
///
/// let mut summary = SamplingSummary::new();
/// for sample in [[1.0, 3.0], [2.0, 4.0], [6.0, 6.0]] {
///     summary.push(Mean.reduce(&sample).unwrap());
/// }
///
/// assert_eq!(summary.count(), 3);
/// assert_eq!(summary.mean(), Some(4.0));
/// assert_eq!(summary.range(), Some((2.0, 6.0)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SamplingSummary {
    count: usize,
    mean: f64,
    /// Sum of squared deviations from `mean`
    m2: f64,
    range: Option<(f64, f64)>,
}

impl SamplingSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one statistic; statistics are finite by construction
    pub fn push(&mut self, statistic: f64) {
        debug_assert!(statistic.is_finite(), "non-finite statistic {}", statistic);

        self.count += 1;
        let shift = statistic - self.mean;
        self.mean += shift / self.count as f64;
        self.m2 += shift * (statistic - self.mean);

        self.range = Some(match self.range {
            Some((lo, hi)) => (lo.min(statistic), hi.max(statistic)),
            None => (statistic, statistic),
        });
    }

    /// Statistics folded in; equals the length of the owning sequence
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of the statistics (the mean of means for a [`Mean`](super::Mean) run)
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Population variance of the statistics
    pub fn variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.m2 / self.count as f64)
    }

    /// Spread of the statistics; for means this estimates the standard error
    pub fn stddev(&self) -> Option<f64> {
        self.variance().map(math::sqrt)
    }

    /// Smallest and largest statistic seen
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_summary_has_nothing_to_report() {
        let summary = SamplingSummary::new();

        assert!(summary.is_empty());
        assert_eq!(summary.mean(), None);
        assert_eq!(summary.stddev(), None);
        assert_eq!(summary.range(), None);
    }

    #[test]
    fn test_single_statistic() {
        let mut summary = SamplingSummary::new();
        summary.push(-3.5);

        assert_eq!(summary.count(), 1);
        assert_eq!(summary.mean(), Some(-3.5));
        assert_eq!(summary.variance(), Some(0.0));
        assert_eq!(summary.range(), Some((-3.5, -3.5)));
    }

    #[test]
    fn test_means_of_dice_pairs() {
        // every ordered pair of faces of a die: the means span 1..=6 with
        // variance 35/24, half the variance of one face
        let mut summary = SamplingSummary::new();
        for a in 1..=6 {
            for b in 1..=6 {
                summary.push((a + b) as f64 / 2.0);
            }
        }

        assert_eq!(summary.count(), 36);
        assert!((summary.mean().unwrap() - 3.5).abs() < 1e-12);
        assert!((summary.variance().unwrap() - 35.0 / 24.0).abs() < 1e-12);
        assert_eq!(summary.range(), Some((1.0, 6.0)));
    }

    #[test]
    fn test_statistics_far_from_zero() {
        // means of a population centred at 1e9 with unit spread
        let mut summary = SamplingSummary::new();
        for i in 0..500 {
            summary.push(1e9 + if i % 2 == 0 { 1.0 } else { -1.0 });
        }

        assert!((summary.mean().unwrap() - 1e9).abs() < 1e-5);
        assert!((summary.stddev().unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clear_starts_over() {
        let mut summary = SamplingSummary::new();
        summary.push(2.0);
        summary.push(8.0);
        summary.clear();

        assert_eq!(summary, SamplingSummary::new());
        summary.push(4.0);
        assert_eq!(summary.range(), Some((4.0, 4.0)));
    }
}
