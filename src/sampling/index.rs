//! Uniform index source over a `rand` generator

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::math;
use crate::traits::{IndexSource, SamplingError};

/// Uniform index source backed by any [`rand::Rng`]
///
/// Draws `u` uniformly from `[0, 1)` and returns `floor(u * n)`. Flooring
/// gives every index the same share of the unit interval; rounding would
/// halve the odds of the first and last index.
///
/// # Example
///
/// ```
/// use livesample::sampling::UniformIndex;
/// use livesample::traits::IndexSource;
///
/// let mut source = UniformIndex::seeded(42);
/// let index = source.next_index(10).unwrap();
/// assert!(index < 10);
/// ```
#[derive(Clone, Debug)]
pub struct UniformIndex<R = SmallRng> {
    rng: R,
}

impl UniformIndex<SmallRng> {
    /// Reproducible source: the same seed yields the same index stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Source seeded from the thread-local generator
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn from_thread_rng() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> UniformIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for UniformIndex<R> {
    fn next_index(&mut self, population_size: usize) -> Result<usize, SamplingError> {
        if population_size == 0 {
            return Err(SamplingError::invalid(
                "population_size",
                "cannot draw an index from an empty population",
            ));
        }
        let u: f64 = self.rng.random();
        let index = math::floor(u * population_size as f64) as usize;
        // u * n can round up to n when n is beyond 2^53
        Ok(index.min(population_size - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        let mut source = UniformIndex::seeded(1);
        assert!(source.next_index(0).is_err());
    }

    #[test]
    fn test_size_one_always_zero() {
        let mut source = UniformIndex::seeded(1);
        for _ in 0..100 {
            assert_eq!(source.next_index(1), Ok(0));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut a = UniformIndex::seeded(99);
        let mut b = UniformIndex::seeded(99);
        for _ in 0..100 {
            assert_eq!(a.next_index(1000), b.next_index(1000));
        }
    }

    #[test]
    fn test_covers_full_range() {
        let mut source = UniformIndex::seeded(5);
        let mut seen = [false; 10];
        for _ in 0..10_000 {
            let i = source.next_index(10).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every index drawn: {:?}", seen);
    }

    #[test]
    fn test_uniformity() {
        let mut source = UniformIndex::seeded(0x853c49e6748fea9b);
        let mut counts = [0usize; 10];
        let iterations = 100_000;
        for _ in 0..iterations {
            counts[source.next_index(10).unwrap()] += 1;
        }

        let expected = iterations / 10;
        for (i, &count) in counts.iter().enumerate() {
            let deviation = (count as i64 - expected as i64).abs() as f64 / expected as f64;
            assert!(
                deviation < 0.05,
                "Index {} drawn {} times (expected ~{})",
                i,
                count,
                expected
            );
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_thread_rng_source() {
        let mut source = UniformIndex::from_thread_rng();
        assert!(source.next_index(5).unwrap() < 5);
    }

    #[test]
    fn test_huge_population_stays_in_bounds() {
        let mut source = UniformIndex::seeded(3);
        let n = usize::MAX;
        for _ in 0..1000 {
            assert!(source.next_index(n).unwrap() < n);
        }
    }
}
