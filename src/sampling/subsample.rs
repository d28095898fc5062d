//! One step's worth of work: draw a sub-sample and reduce it

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::population::Population;
use crate::traits::{IndexSource, Reducer, SamplingError};

/// Fill `scratch` with `size` values drawn with replacement from `population`
///
/// `scratch` is cleared first and reused so a long run does not allocate per
/// step. An index outside the population is reported rather than skipped.
pub fn draw_sample<S>(
    population: &Population,
    size: usize,
    source: &mut S,
    scratch: &mut Vec<f64>,
) -> Result<(), SamplingError>
where
    S: IndexSource + ?Sized,
{
    scratch.clear();
    scratch.reserve(size);
    let len = population.len();
    for _ in 0..size {
        let index = source.next_index(len)?;
        let value = population
            .get(index)
            .ok_or(SamplingError::IndexOutOfRange { index, len })?;
        scratch.push(value);
    }
    Ok(())
}

/// Draw a sub-sample of `size` values and reduce it to one statistic
///
/// A NaN or infinite statistic is reported as
/// [`SamplingError::NonFiniteStatistic`].
///
/// # Example
///
/// ```
/// use livesample::sampling::{draw_statistic, UniformIndex};
/// use livesample::statistics::Mean;
/// use livesample::Population;
///
/// let population = Population::new(vec![4.0; 8]).unwrap();
/// let mut source = UniformIndex::seeded(1);
/// let mut scratch = Vec::new();
///
/// let mean = draw_statistic(&population, 30, &mut source, &Mean, &mut scratch).unwrap();
/// assert_eq!(mean, 4.0);
/// ```
pub fn draw_statistic<S, R>(
    population: &Population,
    size: usize,
    source: &mut S,
    reducer: &R,
    scratch: &mut Vec<f64>,
) -> Result<f64, SamplingError>
where
    S: IndexSource + ?Sized,
    R: Reducer + ?Sized,
{
    draw_sample(population, size, source, scratch)?;
    let statistic = reducer.reduce(scratch)?;
    if !statistic.is_finite() {
        return Err(SamplingError::NonFiniteStatistic {
            reducer: reducer.name(),
        });
    }
    Ok(statistic)
}
