//! # LiveSample
//!
//! Incremental sampling engine behind live Central Limit Theorem
//! demonstrations.
//!
//! A run repeatedly draws a fixed-size sub-sample (with replacement) from a
//! population, reduces it to one statistic, usually the mean, and appends
//! that statistic to a growing [`ResultSequence`]. Steps are spaced in time
//! so a viewer can watch the histogram of sample means turn normal, and a
//! run can be paused, resumed and reset at any point without losing or
//! duplicating work.
//!
//! ## Quick Start
//!
//! ```rust
//! use livesample::clock::{Clock, ManualClock};
//! use livesample::controller::run_until_idle;
//! use livesample::prelude::*;
//! use rand::SeedableRng;
//!
//! let source = UniformIndex::seeded(42);
//! let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
//! let population = Population::log_normal(1000, 0.0, 1.0, &mut rng).unwrap();
//!
//! let mut controller = RunController::new(
//!     SamplerConfig::default(), // 100 means of 30 samples, 100ms apart
//!     population,
//!     Mean,
//!     source,
//!     NullSink,
//! )
//! .unwrap();
//!
//! let mut clock = ManualClock::new();
//! controller.toggle(clock.now()).unwrap();
//! run_until_idle(&mut controller, &mut clock).unwrap();
//!
//! let means = controller.last_completed().unwrap();
//! assert_eq!(means.len(), 100);
//! println!("mean of means: {:?}", means.summary().mean());
//! ```
//!
//! ## Components
//!
//! - [`sampling`]: uniform index source and sub-sample drawing
//! - [`statistics`]: reducers ([`Mean`](statistics::Mean),
//!   [`Variance`](statistics::Variance), [`StdDev`](statistics::StdDev)) and
//!   the running [`SamplingSummary`](statistics::SamplingSummary)
//! - [`schedule`]: the cooperative [`SamplingScheduler`] and its run handles
//! - [`controller`]: the play/pause/reset [`RunController`]
//! - [`clock`]: virtual and wall-clock time sources
//!
//! ## Feature Flags
//!
//! - `std` (default): `std::error::Error`, `SystemClock`, thread-local
//!   seeding
//! - `serde`: Serialize/deserialize configuration and run state

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod clock;
pub mod controller;
pub mod sampling;
pub mod schedule;
pub mod statistics;
pub mod traits;

mod math;
mod population;

pub use controller::{RunContext, RunController, RunState};
pub use population::Population;
pub use schedule::{ResultSequence, RunHandle, SamplerConfig, SamplingScheduler, Tick};
pub use traits::SamplingError;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::controller::{RunController, RunState};
    pub use crate::population::Population;
    pub use crate::sampling::UniformIndex;
    pub use crate::schedule::{ResultSequence, RunHandle, SamplerConfig, SamplingScheduler, Tick};
    pub use crate::statistics::{Mean, StdDev, Variance};
}
