//! Time-driven animation primitives.
//!
//! Animations never sleep on their own. A single external clock hands each
//! [`Stepper`] the time elapsed since the previous call, and the stepper
//! turns that into whole steps, carrying the remainder forward. Tests drive
//! steppers with simulated durations instead of real timers.

use std::time::{Duration, Instant};

/// Result of advancing a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome<T> {
    /// Still running; carries the current value
    InProgress(T),
    /// Finished; carries the final value
    Done(T),
}

impl<T> StepOutcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, StepOutcome::Done(_))
    }

    pub fn value(self) -> T {
        match self {
            StepOutcome::InProgress(v) | StepOutcome::Done(v) => v,
        }
    }
}

/// A step-wise animation advanced by elapsed time.
pub trait Stepper {
    type Output;

    fn advance(&mut self, elapsed: Duration) -> StepOutcome<Self::Output>;
}

/// Accumulates elapsed time and converts it into whole steps of `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepClock {
    interval: Duration,
    carry: Duration,
}

impl StepClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            carry: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` and return the number of whole steps now due.
    pub fn take_steps(&mut self, elapsed: Duration) -> u64 {
        if self.interval.is_zero() {
            self.carry = Duration::ZERO;
            return u64::MAX;
        }
        let total = self.carry.saturating_add(elapsed);
        let interval = self.interval.as_nanos();
        let steps = total.as_nanos() / interval;
        let rem = total.as_nanos() % interval;
        // rem < interval, which fits a Duration
        self.carry = Duration::from_nanos(rem as u64);
        u64::try_from(steps).unwrap_or(u64::MAX)
    }

    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}

/// Turns wall-clock instants into elapsed durations for a shared tick loop.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    last: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time since the previous tick; zero on the first tick.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last = Some(now);
        elapsed
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
