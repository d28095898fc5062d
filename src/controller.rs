//! Play/pause/reset lifecycle on top of the scheduler
//!
//! [`RunController`] owns everything one demonstration needs: the
//! population, the result sequence, the current run handle, the scheduler
//! and the sink. Callers express intent (`toggle`, `reset`) and feed it
//! time (`poll`); the controller keeps the [`RunState`] consistent.

use core::time::Duration;

use tracing::{debug, warn};

use crate::clock::Clock;
use crate::population::Population;
use crate::schedule::{ResultSequence, RunHandle, SamplerConfig, SamplingScheduler, Tick};
use crate::traits::{IndexSource, Reducer, SamplingError, Sink};

/// Lifecycle state of the controller's run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// Nothing scheduled; the result sequence is empty
    #[default]
    Idle,
    /// Steps are being scheduled
    Running,
    /// Stopped part way; progress is kept for resume
    Paused,
    /// Target reached; held only while completion is being handled, after
    /// which the controller is back to `Idle`
    Completed,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// State of the demonstration the controller owns
#[derive(Debug, Clone)]
pub struct RunContext {
    population: Population,
    results: ResultSequence,
    state: RunState,
    handle: Option<RunHandle>,
    last_completed: Option<ResultSequence>,
    completed_runs: u64,
}

impl RunContext {
    fn new(population: Population) -> Self {
        Self {
            population,
            results: ResultSequence::new(),
            state: RunState::Idle,
            handle: None,
            last_completed: None,
            completed_runs: 0,
        }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Statistics of the current (unfinished) run
    pub fn results(&self) -> &ResultSequence {
        &self.results
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Sequence of the most recent run that reached its target
    pub fn last_completed(&self) -> Option<&ResultSequence> {
        self.last_completed.as_ref()
    }

    /// Number of runs that reached their target since the last reset
    pub fn completed_runs(&self) -> u64 {
        self.completed_runs
    }
}

/// Single-toggle front end for a [`SamplingScheduler`]
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use livesample::prelude::*;
///
/// let population = Population::new(vec![1.0, 2.0, 4.0, 8.0]).unwrap();
/// let config = SamplerConfig::default().with_target_count(20);
/// let mut controller =
///     RunController::new(config, population, Mean, UniformIndex::seeded(5), NullSink).unwrap();
///
/// assert_eq!(controller.toggle(Duration::ZERO).unwrap(), RunState::Running);
/// controller.poll(Duration::from_secs(1)).unwrap();
/// assert_eq!(controller.results().len(), 10);
///
/// assert_eq!(controller.toggle(Duration::from_secs(1)).unwrap(), RunState::Paused);
/// assert_eq!(controller.toggle(Duration::from_secs(5)).unwrap(), RunState::Running);
/// controller.poll(Duration::from_secs(7)).unwrap();
///
/// assert_eq!(controller.state(), RunState::Idle);
/// assert_eq!(controller.last_completed().unwrap().len(), 20);
/// ```
#[derive(Debug)]
pub struct RunController<R, S, K> {
    scheduler: SamplingScheduler<R, S>,
    context: RunContext,
    sink: K,
}

impl<R, S, K> RunController<R, S, K>
where
    R: Reducer,
    S: IndexSource,
    K: Sink,
{
    /// Build a controller; fails on an invalid configuration before anything
    /// is scheduled
    pub fn new(
        config: SamplerConfig,
        population: Population,
        reducer: R,
        source: S,
        sink: K,
    ) -> Result<Self, SamplingError> {
        let scheduler = SamplingScheduler::new(config, reducer, source)?;
        Ok(Self::with_scheduler(scheduler, population, sink))
    }

    pub fn with_scheduler(scheduler: SamplingScheduler<R, S>, population: Population, sink: K) -> Self {
        Self {
            scheduler,
            context: RunContext::new(population),
            sink,
        }
    }

    pub fn state(&self) -> RunState {
        self.context.state
    }

    pub fn results(&self) -> &ResultSequence {
        &self.context.results
    }

    pub fn last_completed(&self) -> Option<&ResultSequence> {
        self.context.last_completed.as_ref()
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    pub fn config(&self) -> &SamplerConfig {
        self.scheduler.config()
    }

    /// Handle of the run in progress, if any
    pub fn handle(&self) -> Option<&RunHandle> {
        self.context.handle.as_ref()
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Due time of the next step while running
    pub fn next_deadline(&self) -> Option<Duration> {
        if self.context.state.is_running() {
            self.scheduler.next_deadline()
        } else {
            None
        }
    }

    /// Start-or-pause, like a play/pause button; returns the new state
    pub fn toggle(&mut self, now: Duration) -> Result<RunState, SamplingError> {
        if self.context.state.is_running() {
            self.pause();
            Ok(self.context.state)
        } else {
            self.start(now)
        }
    }

    /// Start a run, or resume a paused one from its current progress
    ///
    /// Does nothing while already running. A run whose target is already met
    /// (including a zero target) completes within this call.
    pub fn start(&mut self, now: Duration) -> Result<RunState, SamplingError> {
        if self.context.state.is_running() {
            return Ok(self.context.state);
        }

        let resuming = self.context.state == RunState::Paused;
        let handle = self
            .scheduler
            .start(&self.context.population, &self.context.results, now);
        debug!(
            run = handle.id(),
            resuming,
            progress = self.context.results.len(),
            "run controller started"
        );
        self.context.handle = Some(handle);
        self.context.state = RunState::Running;
        self.poll(now)
    }

    /// Alias for [`start`](Self::start) that reads better from `Paused`
    pub fn resume(&mut self, now: Duration) -> Result<RunState, SamplingError> {
        self.start(now)
    }

    /// Stop scheduling steps, keeping progress; no-op unless running
    pub fn pause(&mut self) {
        if !self.context.state.is_running() {
            return;
        }
        if let Some(handle) = self.context.handle.take() {
            self.scheduler.pause(&handle);
        }
        self.context.state = RunState::Paused;
    }

    /// Clear all progress and return to `Idle`, from any state
    pub fn reset(&mut self) {
        self.scheduler.reset(&mut self.context.results, &mut self.sink);
        self.context.handle = None;
        self.context.last_completed = None;
        self.context.completed_runs = 0;
        self.context.state = RunState::Idle;
    }

    /// Execute every step due by `now`; returns the resulting state
    ///
    /// A failing step leaves the run `Paused` with its progress intact and
    /// returns the error; it is not retried.
    pub fn poll(&mut self, now: Duration) -> Result<RunState, SamplingError> {
        if !self.context.state.is_running() {
            return Ok(self.context.state);
        }

        match self
            .scheduler
            .poll(now, &mut self.context.results, &mut self.sink)
        {
            Ok(Tick::Waiting { .. }) => {}
            Ok(Tick::Completed) => self.finish_run(),
            Ok(Tick::Idle) => {
                // handle cancelled from outside
                self.context.handle = None;
                self.context.state = RunState::Paused;
            }
            Err(err) => {
                warn!(progress = self.context.results.len(), error = %err, "run halted");
                self.context.handle = None;
                self.context.state = RunState::Paused;
                return Err(err);
            }
        }
        Ok(self.context.state)
    }

    fn finish_run(&mut self) {
        self.context.state = RunState::Completed;
        let finished = core::mem::take(&mut self.context.results);
        debug!(count = finished.len(), "run completed");

        self.context.last_completed = Some(finished);
        self.context.completed_runs += 1;
        self.context.handle = None;
        self.context.state = RunState::Idle;

        // state is settled before the sink hears about it
        self.sink.on_complete();
    }
}

/// Sleep to each deadline on `clock` and poll until the controller stops
/// running; returns the final state
///
/// # Example
///
/// ```
/// use livesample::clock::{Clock, ManualClock};
/// use livesample::controller::run_until_idle;
/// use livesample::prelude::*;
///
/// let population = Population::new(vec![1.0, 2.0, 3.0]).unwrap();
/// let mut controller = RunController::new(
///     SamplerConfig::default(),
///     population,
///     Mean,
///     UniformIndex::seeded(9),
///     NullSink,
/// )
/// .unwrap();
/// let mut clock = ManualClock::new();
///
/// controller.toggle(clock.now()).unwrap();
/// let state = run_until_idle(&mut controller, &mut clock).unwrap();
///
/// assert_eq!(state, RunState::Idle);
/// assert_eq!(controller.last_completed().unwrap().len(), 100);
/// ```
pub fn run_until_idle<R, S, K, C>(
    controller: &mut RunController<R, S, K>,
    clock: &mut C,
) -> Result<RunState, SamplingError>
where
    R: Reducer,
    S: IndexSource,
    K: Sink,
    C: Clock + ?Sized,
{
    while let Some(deadline) = controller.next_deadline() {
        clock.sleep_until(deadline);
        controller.poll(clock.now())?;
    }
    Ok(controller.state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::sampling::UniformIndex;
    use crate::statistics::Mean;
    use crate::traits::NullSink;

    fn controller(target: usize) -> RunController<Mean, UniformIndex, NullSink> {
        let population = Population::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let config = SamplerConfig::default()
            .with_target_count(target)
            .with_samples_per_step(5);
        RunController::new(config, population, Mean, UniformIndex::seeded(23), NullSink).unwrap()
    }

    #[test]
    fn test_toggle_cycles_states() {
        let mut ctl = controller(10);
        assert_eq!(ctl.state(), RunState::Idle);
        assert_eq!(ctl.toggle(Duration::ZERO), Ok(RunState::Running));
        assert_eq!(ctl.toggle(Duration::ZERO), Ok(RunState::Paused));
        assert_eq!(ctl.toggle(Duration::ZERO), Ok(RunState::Running));
    }

    #[test]
    fn test_pause_when_idle_is_noop() {
        let mut ctl = controller(10);
        ctl.pause();
        ctl.pause();
        assert_eq!(ctl.state(), RunState::Idle);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut ctl = controller(10);
        ctl.start(Duration::ZERO).unwrap();
        let handle = ctl.handle().cloned();
        ctl.start(Duration::from_secs(5)).unwrap();
        assert_eq!(ctl.handle().cloned(), handle);
    }

    #[test]
    fn test_poll_while_paused_runs_nothing() {
        let mut ctl = controller(10);
        ctl.toggle(Duration::ZERO).unwrap();
        ctl.poll(Duration::from_millis(300)).unwrap();
        ctl.toggle(Duration::from_millis(300)).unwrap();

        assert_eq!(ctl.poll(Duration::from_secs(60)), Ok(RunState::Paused));
        assert_eq!(ctl.results().len(), 3);
    }

    #[test]
    fn test_zero_target_completes_on_start() {
        let mut ctl = controller(0);
        assert_eq!(ctl.toggle(Duration::ZERO), Ok(RunState::Idle));
        assert_eq!(ctl.context().completed_runs(), 1);
        assert!(ctl.last_completed().unwrap().is_empty());
    }

    #[test]
    fn test_completion_moves_results_out() {
        let mut ctl = controller(4);
        let mut clock = ManualClock::new();
        ctl.toggle(clock.now()).unwrap();
        run_until_idle(&mut ctl, &mut clock).unwrap();

        assert_eq!(ctl.state(), RunState::Idle);
        assert!(ctl.results().is_empty());
        assert_eq!(ctl.last_completed().unwrap().len(), 4);
        assert_eq!(ctl.handle(), None);
    }

    #[test]
    fn test_external_cancel_pauses() {
        let mut ctl = controller(10);
        ctl.toggle(Duration::ZERO).unwrap();
        ctl.poll(Duration::from_millis(200)).unwrap();

        ctl.handle().unwrap().cancel();
        assert_eq!(ctl.poll(Duration::from_secs(1)), Ok(RunState::Paused));
        assert_eq!(ctl.results().len(), 2);

        ctl.toggle(Duration::from_secs(1)).unwrap();
        ctl.poll(Duration::from_secs(10)).unwrap();
        assert_eq!(ctl.last_completed().unwrap().len(), 10);
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut ctl = controller(10);

        ctl.reset();
        assert_eq!(ctl.state(), RunState::Idle);

        ctl.toggle(Duration::ZERO).unwrap();
        ctl.poll(Duration::from_millis(500)).unwrap();
        ctl.reset();
        assert_eq!(ctl.state(), RunState::Idle);
        assert!(ctl.results().is_empty());
        assert_eq!(ctl.next_deadline(), None);

        ctl.toggle(Duration::ZERO).unwrap();
        ctl.poll(Duration::from_millis(500)).unwrap();
        ctl.toggle(Duration::from_millis(500)).unwrap();
        ctl.reset();
        ctl.reset();
        assert_eq!(ctl.state(), RunState::Idle);
        assert!(ctl.results().is_empty());
    }
}
