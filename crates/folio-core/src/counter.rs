//! Animated statistics counter.
//!
//! A counter ramps its displayed value from zero to a target in steps of
//! `ceil(target / steps)`, one step per interval. The value never exceeds
//! the target and ends exactly on it.
//!
//! ```text
//! idle ──start──▶ animating ──value ≥ target──▶ settled
//!                    │
//!                    └──cancel──▶ cancelled
//! ```

use std::time::Duration;

use crate::error::{FolioError, FolioResult};
use crate::stepper::{StepClock, StepOutcome, Stepper};

/// Lifecycle of a counter. There is no edge back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Animating,
    Settled,
    Cancelled,
}

/// Step-wise ramp of a single counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterStepper {
    target: u64,
    increment: u64,
    value: u64,
    phase: CounterPhase,
    clock: StepClock,
}

impl CounterStepper {
    /// Create an idle counter. `steps` is clamped to at least one.
    pub fn new(target: u64, steps: u64, step_interval: Duration) -> Self {
        Self {
            target,
            increment: target.div_ceil(steps.max(1)),
            value: 0,
            phase: CounterPhase::Idle,
            clock: StepClock::new(step_interval),
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn increment(&self) -> u64 {
        self.increment
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == CounterPhase::Animating
    }

    /// Begin the ramp at zero. Returns `false` if the counter already left
    /// `Idle`, in which case nothing changes.
    pub fn start(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.value = 0;
        self.clock.reset();
        self.phase = if self.target == 0 {
            CounterPhase::Settled
        } else {
            CounterPhase::Animating
        };
        true
    }

    /// Stop a running ramp where it is. Settled counters stay settled.
    pub fn cancel(&mut self) {
        if matches!(self.phase, CounterPhase::Idle | CounterPhase::Animating) {
            self.phase = CounterPhase::Cancelled;
        }
    }

    /// Text shown in the counter element, e.g. `150+`.
    pub fn display(&self) -> String {
        format!("{}+", self.value)
    }
}

impl Stepper for CounterStepper {
    type Output = u64;

    fn advance(&mut self, elapsed: Duration) -> StepOutcome<u64> {
        match self.phase {
            CounterPhase::Idle => return StepOutcome::InProgress(self.value),
            CounterPhase::Settled | CounterPhase::Cancelled => {
                return StepOutcome::Done(self.value)
            }
            CounterPhase::Animating => {}
        }

        let steps = self.clock.take_steps(elapsed);
        let gained = self.increment.saturating_mul(steps);
        self.value = self.value.saturating_add(gained).min(self.target);

        if self.value >= self.target {
            self.phase = CounterPhase::Settled;
            StepOutcome::Done(self.value)
        } else {
            StepOutcome::InProgress(self.value)
        }
    }
}

/// Resolve a counter's target from its `data-target` attribute, falling back
/// to the element text with any `+` stripped.
pub fn parse_target(key: &str, data_target: Option<&str>, text: &str) -> FolioResult<u64> {
    let raw = match data_target {
        Some(attr) => attr.trim().to_string(),
        None => text.replace('+', "").trim().to_string(),
    };
    raw.parse::<u64>()
        .map_err(|_| FolioError::InvalidCounterTarget {
            key: key.to_string(),
            raw,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_increment_is_ceiling() {
        assert_eq!(CounterStepper::new(150, 200, MS).increment(), 1);
        assert_eq!(CounterStepper::new(1000, 200, MS).increment(), 5);
        assert_eq!(CounterStepper::new(1001, 200, MS).increment(), 6);
    }

    #[test]
    fn test_ramp_settles_at_target() {
        let mut counter = CounterStepper::new(150, 200, MS);
        assert!(counter.start());
        assert_eq!(counter.display(), "0+");

        let outcome = counter.advance(MS * 149);
        assert_eq!(outcome, StepOutcome::InProgress(149));

        let outcome = counter.advance(MS);
        assert_eq!(outcome, StepOutcome::Done(150));
        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert_eq!(counter.display(), "150+");
    }

    #[test]
    fn test_overshooting_step_is_clamped() {
        let mut counter = CounterStepper::new(1001, 200, MS);
        counter.start();
        // 166 steps of 6 = 996, the next one would be 1002
        assert_eq!(counter.advance(MS * 166), StepOutcome::InProgress(996));
        assert_eq!(counter.advance(MS), StepOutcome::Done(1001));
    }

    #[test]
    fn test_idle_counter_does_not_advance() {
        let mut counter = CounterStepper::new(50, 200, MS);
        assert_eq!(counter.advance(MS * 100), StepOutcome::InProgress(0));
        assert_eq!(counter.phase(), CounterPhase::Idle);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut counter = CounterStepper::new(10, 200, MS);
        assert!(counter.start());
        counter.advance(MS * 4);
        assert!(!counter.start());
        assert_eq!(counter.value(), 4);
    }

    #[test]
    fn test_zero_target_settles_immediately() {
        let mut counter = CounterStepper::new(0, 200, MS);
        counter.start();
        assert_eq!(counter.phase(), CounterPhase::Settled);
        assert_eq!(counter.advance(MS), StepOutcome::Done(0));
    }

    #[test]
    fn test_cancel_freezes_value() {
        let mut counter = CounterStepper::new(100, 200, MS);
        counter.start();
        counter.advance(MS * 10);
        counter.cancel();
        assert_eq!(counter.advance(MS * 500), StepOutcome::Done(10));
        assert!(!counter.start());
    }

    #[test]
    fn test_sub_interval_ticks_accumulate() {
        let mut counter = CounterStepper::new(5, 200, Duration::from_millis(4));
        counter.start();
        assert_eq!(counter.advance(MS * 3), StepOutcome::InProgress(0));
        assert_eq!(counter.advance(MS), StepOutcome::InProgress(1));
    }

    #[test]
    fn test_parse_target_prefers_attribute() {
        assert_eq!(parse_target("c", Some("150"), "0+").unwrap(), 150);
        assert_eq!(parse_target("c", None, "42+").unwrap(), 42);
    }

    #[test]
    fn test_parse_target_rejects_non_numeric() {
        let err = parse_target("stat", Some("lots"), "0+").unwrap_err();
        assert!(matches!(err, FolioError::InvalidCounterTarget { .. }));
        assert!(parse_target("stat", None, "").is_err());
    }
}
