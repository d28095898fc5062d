//! Time sources for driving a run
//!
//! The scheduler never reads time itself; callers hand it a [`Duration`]
//! since an origin. [`ManualClock`] makes that time virtual, which is what
//! tests and benchmarks want. [`SystemClock`] is the wall clock.

use core::time::Duration;

/// Monotonic time since some origin, plus a way to wait for a deadline
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;

    /// Block until `now() >= deadline`
    fn sleep_until(&mut self, deadline: Duration);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn sleep_until(&mut self, deadline: Duration) {
        (**self).sleep_until(deadline)
    }
}

/// Virtual clock; sleeping jumps straight to the deadline
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use livesample::clock::{Clock, ManualClock};
///
/// let mut clock = ManualClock::new();
/// clock.sleep_until(Duration::from_secs(3));
/// clock.advance(Duration::from_secs(1));
/// assert_eq!(clock.now(), Duration::from_secs(4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now = self.now.saturating_add(by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep_until(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }
}

/// Wall clock measured from its creation
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep_until(&mut self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}
