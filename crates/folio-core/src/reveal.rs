//! One-way fade-in reveal.

/// Style applied to every reveal target so the change animates.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

/// Reveal state of an element. `Revealed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Next state after observing `ratio` against `threshold`.
    pub fn observe(self, ratio: f64, threshold: f64) -> Self {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Hidden if crate::intersection::crosses(ratio, threshold) => {
                RevealState::Revealed
            }
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn is_revealed(&self) -> bool {
        *self == RevealState::Revealed
    }

    pub fn opacity(&self) -> &'static str {
        match self {
            RevealState::Hidden => "0",
            RevealState::Revealed => "1",
        }
    }

    pub fn transform(&self) -> &'static str {
        match self {
            RevealState::Hidden => "translateY(30px)",
            RevealState::Revealed => "translateY(0)",
        }
    }

    /// Inline style for the element.
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: {}; transition: {};",
            self.opacity(),
            self.transform(),
            REVEAL_TRANSITION
        )
    }
}

/// Inline style for a reveal target whose tracked state may not exist yet.
///
/// Targets start hidden so installing the tracker does not flash them. If the
/// tracker failed to start they render fully visible instead.
pub fn reveal_style(state: Option<RevealState>, tracker_failed: bool) -> String {
    match state {
        Some(state) => state.style(),
        None if tracker_failed => String::new(),
        None => RevealState::Hidden.style(),
    }
}
