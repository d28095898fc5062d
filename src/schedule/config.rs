//! Per-run parameters

use core::time::Duration;

use crate::traits::SamplingError;

/// Number of statistics a run computes unless configured otherwise
pub const DEFAULT_TARGET_COUNT: usize = 100;
/// Sub-sample size per statistic unless configured otherwise
pub const DEFAULT_SAMPLES_PER_STEP: usize = 30;
/// Spacing between steps unless configured otherwise
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// Fixed parameters of a sampling run
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use livesample::SamplerConfig;
///
/// let config = SamplerConfig::default()
///     .with_target_count(500)
///     .with_step_delay(Duration::from_millis(10));
///
/// assert_eq!(config.samples_per_step, 30);
/// assert!(config.validate().is_ok());
/// assert!(config.with_samples_per_step(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// How many statistics make up a complete run
    pub target_count: usize,
    /// How many population values each statistic is computed from
    pub samples_per_step: usize,
    /// Wall-clock spacing between consecutive steps
    pub step_delay: Duration,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            samples_per_step: DEFAULT_SAMPLES_PER_STEP,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

impl SamplerConfig {
    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    pub fn with_samples_per_step(mut self, samples_per_step: usize) -> Self {
        self.samples_per_step = samples_per_step;
        self
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Check the configuration before any step is scheduled
    ///
    /// A zero `target_count` is valid (the run completes with no steps); a
    /// zero `samples_per_step` is not, since nothing can reduce an empty
    /// sample.
    pub fn validate(&self) -> Result<(), SamplingError> {
        if self.samples_per_step == 0 {
            return Err(SamplingError::invalid(
                "samples_per_step",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
