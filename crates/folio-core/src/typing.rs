//! Typewriter effect for the hero subtitle.

use std::time::Duration;

use crate::stepper::{StepClock, StepOutcome, Stepper};

/// Reveals a text one character per interval.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    chars: Vec<char>,
    shown: usize,
    clock: StepClock,
}

impl TypingEffect {
    pub fn new(text: &str, interval: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
            clock: StepClock::new(interval),
        }
    }

    /// The currently typed prefix.
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

impl Stepper for TypingEffect {
    type Output = usize;

    fn advance(&mut self, elapsed: Duration) -> StepOutcome<usize> {
        if self.is_done() {
            return StepOutcome::Done(self.shown);
        }
        let steps = usize::try_from(self.clock.take_steps(elapsed)).unwrap_or(usize::MAX);
        self.shown = self.shown.saturating_add(steps).min(self.chars.len());
        if self.is_done() {
            StepOutcome::Done(self.shown)
        } else {
            StepOutcome::InProgress(self.shown)
        }
    }
}
