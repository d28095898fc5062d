//! Run scheduling: configuration, cancellation handles, the result sequence
//! and the cooperative scheduler that fills it.
//!
//! # Example
//!
//! ```
//! use core::time::Duration;
//! use livesample::prelude::*;
//!
//! let config = SamplerConfig::default().with_target_count(10);
//! let mut scheduler = SamplingScheduler::new(config, Mean, UniformIndex::seeded(3)).unwrap();
//! let population = Population::new(vec![1.0, 5.0, 9.0]).unwrap();
//! let mut results = ResultSequence::new();
//!
//! // Pause after half the run, then pick up where it stopped
//! let handle = scheduler.start(&population, &results, Duration::ZERO);
//! scheduler.poll(Duration::from_millis(500), &mut results, &mut NullSink).unwrap();
//! scheduler.pause(&handle);
//! assert_eq!(results.len(), 5);
//!
//! scheduler.start(&population, &results, Duration::from_secs(60));
//! let tick = scheduler.poll(Duration::from_secs(120), &mut results, &mut NullSink).unwrap();
//! assert_eq!(tick, Tick::Completed);
//! assert_eq!(results.len(), 10);
//! ```

mod config;
mod handle;
mod results;
mod scheduler;

pub use config::{
    SamplerConfig, DEFAULT_SAMPLES_PER_STEP, DEFAULT_STEP_DELAY, DEFAULT_TARGET_COUNT,
};
pub use handle::RunHandle;
pub use results::ResultSequence;
pub use scheduler::{SamplingScheduler, Tick};
