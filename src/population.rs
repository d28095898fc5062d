//! The fixed data set sub-samples are drawn from

#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};

use rand::Rng;
use rand_distr::{Distribution, LogNormal};

use crate::traits::SamplingError;

/// Immutable, non-empty sequence of finite values
///
/// Cloning is cheap: all clones share one allocation, so a scheduler can hold
/// the population for the duration of a run without copying it.
///
/// # Example
///
/// ```
/// use livesample::Population;
///
/// let population = Population::new(vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(population.len(), 3);
/// assert!(Population::new(Vec::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    values: Arc<[f64]>,
}

impl Population {
    /// Wrap `values`, rejecting an empty set or any NaN/infinite entry
    pub fn new(values: Vec<f64>) -> Result<Self, SamplingError> {
        if values.is_empty() {
            return Err(SamplingError::invalid("population", "must not be empty"));
        }
        if !values.iter().all(|v| v.is_finite()) {
            return Err(SamplingError::invalid("population", "values must be finite"));
        }
        Ok(Self {
            values: values.into(),
        })
    }

    /// Generate `len` draws from a log-normal distribution
    ///
    /// `mu` and `sigma` parameterise the underlying normal. The classic CLT
    /// demonstration uses `log_normal(1000, 0.0, 1.0, rng)`: a strongly
    /// right-skewed population whose sample means still come out normal.
    pub fn log_normal<R: Rng + ?Sized>(
        len: usize,
        mu: f64,
        sigma: f64,
        rng: &mut R,
    ) -> Result<Self, SamplingError> {
        if !mu.is_finite() {
            return Err(SamplingError::invalid("mu", "must be finite"));
        }
        if !(sigma.is_finite() && sigma >= 0.0) {
            return Err(SamplingError::invalid("sigma", "must be finite and non-negative"));
        }
        let dist = LogNormal::new(mu, sigma)
            .map_err(|_| SamplingError::invalid("sigma", "must be finite and non-negative"))?;
        Self::new(dist.sample_iter(rng).take(len).collect())
    }

    /// Number of values; never zero
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for Population {
    type Error = SamplingError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Population {
    type Error = SamplingError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}
