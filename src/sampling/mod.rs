//! Random sub-sampling of a population
//!
//! [`UniformIndex`] picks indices; [`draw_sample`] gathers the values at
//! those indices (with replacement) and [`draw_statistic`] reduces them.
//!
//! # Example
//!
//! ```
//! use livesample::sampling::{draw_statistic, UniformIndex};
//! use livesample::statistics::Mean;
//! use livesample::Population;
//!
//! let population = Population::new((1..=100).map(f64::from).collect()).unwrap();
//! let mut source = UniformIndex::seeded(7);
//! let mut scratch = Vec::new();
//!
//! let mean = draw_statistic(&population, 30, &mut source, &Mean, &mut scratch).unwrap();
//! assert!((1.0..=100.0).contains(&mean));
//! ```

mod index;
mod subsample;

pub use index::UniformIndex;
pub use subsample::{draw_sample, draw_statistic};
