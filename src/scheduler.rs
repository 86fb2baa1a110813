//! Fixed-timestep tick pacing
//!
//! A tick is due once the nominal interval has elapsed since the last
//! committed tick. Committing re-anchors to "now": time beyond one interval
//! is folded into that tick's delta, never replayed as catch-up ticks.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source
pub trait Clock {
    type Instant: Copy;

    fn now(&self) -> Self::Instant;

    /// Nanoseconds from `earlier` to `later` (may be zero or negative on a bad clock)
    fn elapsed_nanos(&self, earlier: Self::Instant, later: Self::Instant) -> i64;

    /// Yield until roughly `nanos` have passed
    fn sleep(&self, nanos: i64);
}

/// Wall clock backed by [`std::time::Instant`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, earlier: Instant, later: Instant) -> i64 {
        match later.checked_duration_since(earlier) {
            Some(elapsed) => i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX),
            None => -i64::try_from(earlier.duration_since(later).as_nanos()).unwrap_or(i64::MAX),
        }
    }

    fn sleep(&self, nanos: i64) {
        if nanos > 0 {
            std::thread::sleep(Duration::from_nanos(nanos as u64));
        }
    }
}

/// Simulated clock: time only moves when told to, and sleeping advances it
///
/// Used for headless runs and tests, where ticks should be exact and instant.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, nanos: i64) {
        self.now.set(self.now.get() + nanos);
    }

    /// Set the current time, even backwards
    pub fn set(&self, nanos: i64) {
        self.now.set(nanos);
    }
}

impl Clock for ManualClock {
    type Instant = i64;

    fn now(&self) -> i64 {
        self.now.get()
    }

    fn elapsed_nanos(&self, earlier: i64, later: i64) -> i64 {
        later.saturating_sub(earlier)
    }

    fn sleep(&self, nanos: i64) {
        if nanos > 0 {
            self.advance(nanos);
        }
    }
}

/// Result of polling the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Commit a tick covering this many nanoseconds
    Ready { delta_nanos: i64 },
    /// Not yet; this many nanoseconds remain until the next tick
    Wait { nanos: i64 },
}

/// Decides when the next tick is due
#[derive(Debug, Clone)]
pub struct Scheduler<I> {
    anchor: I,
    interval_nanos: i64,
}

impl<I: Copy> Scheduler<I> {
    pub fn new<C: Clock<Instant = I>>(clock: &C, interval_nanos: i64) -> Self {
        Self {
            anchor: clock.now(),
            interval_nanos: interval_nanos.max(1),
        }
    }

    #[inline]
    pub fn interval_nanos(&self) -> i64 {
        self.interval_nanos
    }

    /// Check the clock; on `Ready` the reference point moves to now
    pub fn poll<C: Clock<Instant = I>>(&mut self, clock: &C) -> Pace {
        let now = clock.now();
        let elapsed = clock.elapsed_nanos(self.anchor, now);

        if elapsed <= 0 {
            // Clock stood still or went backwards: keep waiting
            return Pace::Wait {
                nanos: self.interval_nanos,
            };
        }
        if elapsed < self.interval_nanos {
            return Pace::Wait {
                nanos: self.interval_nanos - elapsed,
            };
        }

        self.anchor = now;
        Pace::Ready {
            delta_nanos: elapsed,
        }
    }
}
