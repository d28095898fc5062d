//! Sub-sample reducers: mean and the second-moment family
//!
//! All sums use Neumaier compensated summation so
//! the result does not depend on the draw order of the sub-sample.

use crate::math;
use crate::traits::{Reducer, SamplingError};

fn require_samples(samples: &[f64]) -> Result<f64, SamplingError> {
    if samples.is_empty() {
        return Err(SamplingError::invalid("samples", "cannot reduce an empty sample"));
    }
    Ok(samples.len() as f64)
}

/// `sum(values) / n`, falling back to `sum(x / n)` when the plain sum overflows
fn mean_of<I>(values: I, n: f64) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let sum = math::compensated_sum(values.clone());
    if sum.is_finite() {
        sum / n
    } else {
        math::compensated_sum(values.map(|x| x / n))
    }
}

/// `E[X²] − E[X]²`, unclamped
fn raw_variance<I>(values: I, n: f64) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    let mean = mean_of(values.clone(), n);
    let mean_of_squares = mean_of(values.map(|x| x * x), n);
    mean_of_squares - mean * mean
}

/// Arithmetic mean: `sum(x) / n`
///
/// # Example
///
/// ```
/// use livesample::statistics::Mean;
/// use livesample::traits::Reducer;
///
/// assert_eq!(Mean.reduce(&[1.0, 2.0, 3.0, 6.0]).unwrap(), 3.0);
/// assert!(Mean.reduce(&[]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean;

impl Reducer for Mean {
    fn reduce(&self, samples: &[f64]) -> Result<f64, SamplingError> {
        let n = require_samples(samples)?;
        Ok(mean_of(samples.iter().copied(), n))
    }

    fn name(&self) -> &'static str {
        "mean"
    }
}

/// Population variance: `E[X²] − (E[X])²`
///
/// The mean of squares uses real multiplication. Rounding can push the
/// difference a hair below zero for near-constant samples, so negative
/// results are clamped at `0.0`. When the squares overflow, the samples are
/// rescaled by their largest magnitude; a variance that is itself too large
/// for `f64` comes back as `+inf`, never as a silent `0.0`.
///
/// # Example
///
/// ```
/// use livesample::statistics::Variance;
/// use livesample::traits::Reducer;
///
/// let v = Variance.reduce(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(v, 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Variance;

impl Reducer for Variance {
    fn reduce(&self, samples: &[f64]) -> Result<f64, SamplingError> {
        let n = require_samples(samples)?;
        let mut variance = raw_variance(samples.iter().copied(), n);
        if !variance.is_finite() {
            let scale = samples.iter().fold(0.0_f64, |m, &x| m.max(math::abs(x)));
            if scale > 0.0 && scale.is_finite() {
                let scaled = raw_variance(samples.iter().map(|&x| x / scale), n);
                variance = scale * (scale * scaled);
            }
        }
        Ok(if variance < 0.0 { 0.0 } else { variance })
    }

    fn name(&self) -> &'static str {
        "variance"
    }
}

/// Population standard deviation, the square root of [`Variance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdDev;

impl Reducer for StdDev {
    fn reduce(&self, samples: &[f64]) -> Result<f64, SamplingError> {
        Variance.reduce(samples).map(math::sqrt)
    }

    fn name(&self) -> &'static str {
        "stddev"
    }
}
