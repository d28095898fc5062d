//! Statistics: sub-sample reducers and the running summary of a run
//!
//! A [`Reducer`](crate::traits::Reducer) turns one sub-sample into one
//! number. [`SamplingSummary`] tracks the numbers a run has produced.
//!
//! # Example
//!
//! ```
//! use livesample::statistics::{Mean, SamplingSummary};
//! use livesample::traits::Reducer;
//!
//! let mut summary = SamplingSummary::new();
//! for sample in [[1.0, 3.0], [2.0, 4.0], [5.0, 5.0]] {
//!     summary.push(Mean.reduce(&sample).unwrap());
//! }
//!
//! assert_eq!(summary.count(), 3);
//! assert!((summary.mean().unwrap() - 10.0 / 3.0).abs() < 1e-12);
//! ```

mod reducers;
mod summary;

pub use reducers::{Mean, StdDev, Variance};
pub use summary::SamplingSummary;
