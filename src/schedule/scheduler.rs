//! Cooperative, cancellable sampling scheduler

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::time::Duration;

use tracing::{debug, trace, warn};

use super::config::SamplerConfig;
use super::handle::RunHandle;
use super::results::ResultSequence;
use crate::population::Population;
use crate::sampling::draw_statistic;
use crate::traits::{IndexSource, Reducer, SamplingError, Sink};

/// What a call to [`SamplingScheduler::poll`] left behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No run is active
    Idle,
    /// The run is active; its next step is due at `next_due`
    Waiting { next_due: Duration },
    /// The run just reached its target; reported once per run
    Completed,
}

#[derive(Debug)]
struct ActiveRun {
    handle: RunHandle,
    population: Population,
    next_due: Duration,
}

/// Steppable computation of `target_count` sub-sample statistics
///
/// Time is supplied by the caller as a [`Duration`] since some fixed origin
/// (see [`Clock`](crate::clock::Clock)). [`start`](Self::start) arms a run;
/// [`poll`](Self::poll) executes every step that has come due, in order,
/// spaced `step_delay` apart. Nothing runs between polls, and a step never
/// overlaps another.
///
/// Progress lives in a caller-owned [`ResultSequence`]. Starting again with
/// a partially filled sequence resumes it: only the remaining
/// `target_count - len` steps are scheduled.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use livesample::prelude::*;
///
/// let config = SamplerConfig::default().with_target_count(3);
/// let mut scheduler = SamplingScheduler::new(config, Mean, UniformIndex::seeded(1)).unwrap();
/// let population = Population::new(vec![1.0, 2.0, 3.0]).unwrap();
/// let mut results = ResultSequence::new();
///
/// scheduler.start(&population, &results, Duration::ZERO);
/// let tick = scheduler
///     .poll(Duration::from_secs(1), &mut results, &mut NullSink)
///     .unwrap();
///
/// assert_eq!(tick, Tick::Completed);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug)]
pub struct SamplingScheduler<R, S> {
    config: SamplerConfig,
    reducer: R,
    source: S,
    active: Option<ActiveRun>,
    next_run_id: u64,
    scratch: Vec<f64>,
}

impl<R: Reducer, S: IndexSource> SamplingScheduler<R, S> {
    /// Create a scheduler, rejecting an invalid configuration up front
    pub fn new(config: SamplerConfig, reducer: R, source: S) -> Result<Self, SamplingError> {
        config.validate()?;
        Ok(Self {
            config,
            reducer,
            source,
            active: None,
            next_run_id: 0,
            scratch: Vec::with_capacity(config.samples_per_step),
        })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    /// Handle of the active run, if any
    pub fn active_handle(&self) -> Option<&RunHandle> {
        self.active.as_ref().map(|run| &run.handle)
    }

    /// Due time of the next step, if a run is active
    pub fn next_deadline(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .filter(|run| run.handle.is_active())
            .map(|run| run.next_due)
    }

    /// Arm a run that continues from `results`
    ///
    /// The first step is due `step_delay` after `now`. If `results` already
    /// holds `target_count` statistics nothing is scheduled and the next
    /// poll reports [`Tick::Completed`] straight away. Any run still active
    /// is cancelled first.
    pub fn start(
        &mut self,
        population: &Population,
        results: &ResultSequence,
        now: Duration,
    ) -> RunHandle {
        if let Some(previous) = self.active.take() {
            previous.handle.cancel();
        }

        let handle = RunHandle::new(self.next_run_id);
        self.next_run_id += 1;

        let remaining = self.config.target_count.saturating_sub(results.len());
        let next_due = if remaining == 0 {
            now
        } else {
            now.saturating_add(self.config.step_delay)
        };

        debug!(
            run = handle.id(),
            progress = results.len(),
            remaining,
            reducer = self.reducer.name(),
            "sampling run started"
        );

        self.active = Some(ActiveRun {
            handle: handle.clone(),
            population: population.clone(),
            next_due,
        });
        handle
    }

    /// Cancel the future steps of `handle`'s run
    ///
    /// Results are untouched. Pausing a handle that is not active, or is
    /// not this scheduler's current run, does nothing further.
    pub fn pause(&mut self, handle: &RunHandle) {
        handle.cancel();
        if self.active.as_ref().is_some_and(|run| run.handle == *handle) {
            self.active = None;
            debug!(run = handle.id(), "sampling run paused");
        }
    }

    /// Cancel any active run, empty `results`, and clear the sink
    pub fn reset<K: Sink + ?Sized>(&mut self, results: &mut ResultSequence, sink: &mut K) {
        if let Some(run) = self.active.take() {
            run.handle.cancel();
        }
        results.clear();
        sink.reset();
        debug!("sampling state reset");
    }

    /// Run every step due at or before `now`
    ///
    /// Each step draws `samples_per_step` values, reduces them, appends the
    /// statistic, then calls [`Sink::update`] and [`Sink::on_progress`].
    /// The step that brings `results` to `target_count` is the last one; the
    /// handle is marked finished and [`Tick::Completed`] is returned.
    ///
    /// A failing step appends nothing. The run is cancelled and the error
    /// returned; the step is not retried.
    pub fn poll<K: Sink + ?Sized>(
        &mut self,
        now: Duration,
        results: &mut ResultSequence,
        sink: &mut K,
    ) -> Result<Tick, SamplingError> {
        let Self {
            config,
            reducer,
            source,
            active,
            scratch,
            ..
        } = self;

        loop {
            let Some(run) = active.as_mut() else {
                return Ok(Tick::Idle);
            };

            if !run.handle.is_active() {
                *active = None;
                return Ok(Tick::Idle);
            }

            if results.len() >= config.target_count {
                run.handle.finish();
                debug!(run = run.handle.id(), count = results.len(), "sampling run complete");
                *active = None;
                return Ok(Tick::Completed);
            }

            if run.next_due > now {
                return Ok(Tick::Waiting {
                    next_due: run.next_due,
                });
            }

            let statistic = match draw_statistic(
                &run.population,
                config.samples_per_step,
                source,
                &*reducer,
                scratch,
            ) {
                Ok(statistic) => statistic,
                Err(err) => {
                    warn!(run = run.handle.id(), progress = results.len(), error = %err, "sampling step failed");
                    run.handle.cancel();
                    *active = None;
                    return Err(err);
                }
            };

            results.push(statistic);
            trace!(run = run.handle.id(), count = results.len(), statistic, "step");
            sink.update(results.as_slice());
            sink.on_progress(results.len());

            run.next_due = run.next_due.saturating_add(config.step_delay);
        }
    }
}
