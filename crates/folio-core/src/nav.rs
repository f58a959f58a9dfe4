//! Active-section tracking for the navigation links.
//!
//! The active link is recomputed from scratch on every scroll: the biased
//! scroll position is matched against each section's `[top, top + height)`
//! range in document order and the first match wins. When nothing matches,
//! the previous selection is kept.

use crate::types::{Section, SectionId};

/// Scroll offset shifted by the activation bias.
pub fn scroll_position(scroll_y: f64, bias: f64) -> f64 {
    scroll_y + bias
}

/// First section (in document order) whose range contains `position`.
pub fn section_at(sections: &[Section], position: f64) -> Option<&SectionId> {
    sections
        .iter()
        .find(|section| section.contains(position))
        .map(|section| &section.id)
}

/// Pairs of sections whose ranges overlap, in document order.
pub fn overlapping_sections(sections: &[Section]) -> Vec<(SectionId, SectionId)> {
    let mut pairs = Vec::new();
    for (i, a) in sections.iter().enumerate() {
        for b in &sections[i + 1..] {
            if a.top < b.bottom() && b.top < a.bottom() {
                pairs.push((a.id.clone(), b.id.clone()));
            }
        }
    }
    pairs
}

/// Page-wide nav selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    active: Option<SectionId>,
}

impl NavState {
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Whether the link with `href` (`#id`) is the active one.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active, crate::anchor::parse_anchor(href)) {
            (Some(active), Some(target)) => *active == target,
            _ => false,
        }
    }

    /// Selection after scrolling to `scroll_y` with the given layout.
    pub fn on_scroll(&self, sections: &[Section], scroll_y: f64, bias: f64) -> NavState {
        match section_at(sections, scroll_position(scroll_y, bias)) {
            Some(id) => NavState {
                active: Some(id.clone()),
            },
            None => self.clone(),
        }
    }
}
