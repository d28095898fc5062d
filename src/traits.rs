//! Core traits for the sampling engine
//!
//! The scheduler is generic over three seams: where random indices come from
//! ([`IndexSource`]), how a sub-sample collapses into one number
//! ([`Reducer`]), and who watches the growing result sequence ([`Sink`]).

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

/// Error raised by configuration, index sources and reducers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// An argument is outside the domain of the operation
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
    /// An index source produced an index past the end of the population
    IndexOutOfRange { index: usize, len: usize },
    /// A reducer returned NaN or an infinity; nothing is appended for it
    NonFiniteStatistic { reducer: &'static str },
}

impl SamplingError {
    pub(crate) const fn invalid(name: &'static str, reason: &'static str) -> Self {
        SamplingError::InvalidArgument { name, reason }
    }
}

impl core::fmt::Display for SamplingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SamplingError::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{}`: {}", name, reason)
            }
            SamplingError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for population of {}", index, len)
            }
            SamplingError::NonFiniteStatistic { reducer } => {
                write!(f, "reducer `{}` produced a non-finite statistic", reducer)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SamplingError {}

/// Source of uniformly distributed population indices
pub trait IndexSource {
    /// Draw an index uniformly from `[0, population_size)`
    ///
    /// Returns [`SamplingError::InvalidArgument`] when `population_size` is zero.
    fn next_index(&mut self, population_size: usize) -> Result<usize, SamplingError>;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn next_index(&mut self, population_size: usize) -> Result<usize, SamplingError> {
        (**self).next_index(population_size)
    }
}

/// Reduces a sub-sample to a single summary statistic
pub trait Reducer {
    /// Reduce `samples` to one value
    ///
    /// Empty input is a caller error and yields [`SamplingError::InvalidArgument`].
    fn reduce(&self, samples: &[f64]) -> Result<f64, SamplingError>;

    /// Short stable name, used in logs
    fn name(&self) -> &'static str;
}

impl<R: Reducer + ?Sized> Reducer for &R {
    fn reduce(&self, samples: &[f64]) -> Result<f64, SamplingError> {
        (**self).reduce(samples)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Reducer + ?Sized> Reducer for Box<R> {
    fn reduce(&self, samples: &[f64]) -> Result<f64, SamplingError> {
        (**self).reduce(samples)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Consumer of the growing result sequence
///
/// A sink only ever sees the sequence by shared reference; it cannot alter
/// run progress.
pub trait Sink {
    /// Called after every appended result with the full current sequence
    fn update(&mut self, results: &[f64]);

    /// Clear any displayed state
    fn reset(&mut self);

    /// Called after every appended result with the new length
    fn on_progress(&mut self, count: usize);

    /// Called exactly once when a run finishes naturally
    fn on_complete(&mut self);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn update(&mut self, results: &[f64]) {
        (**self).update(results)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn on_progress(&mut self, count: usize) {
        (**self).on_progress(count)
    }

    fn on_complete(&mut self) {
        (**self).on_complete()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn update(&mut self, results: &[f64]) {
        (**self).update(results)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn on_progress(&mut self, count: usize) {
        (**self).on_progress(count)
    }

    fn on_complete(&mut self) {
        (**self).on_complete()
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn update(&mut self, _results: &[f64]) {}
    fn reset(&mut self) {}
    fn on_progress(&mut self, _count: usize) {}
    fn on_complete(&mut self) {}
}
