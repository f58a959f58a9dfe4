//! Scroll-state tracker.
//!
//! Keeps the active nav link, navbar style, reveal states and counter ramps
//! consistent with the page's scroll position and element visibility.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  PageEvent   ┌──────────────────────────┐
//! │ page adapter │ ───────────▶ │ reduce(state, event)     │
//! │ (measures    │              │  ├── Scrolled  → nav     │
//! │  elements)   │ ◀─────────── │  ├── Intersection → rev. │
//! └──────────────┘ TrackerState │  ├── Tick → counters     │
//!                               │  └── Removed / Teardown  │
//!                               └──────────────────────────┘
//! ```
//!
//! The tracker is built once per page by [`ScrollStateTracker::init`], which
//! checks the page manifest against the registered element handles and
//! fails with a named error when the two disagree.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Duration;

use crate::anchor::parse_anchor;
use crate::config::TrackerConfig;
use crate::counter::{parse_target, CounterPhase, CounterStepper};
use crate::error::{FolioError, FolioResult};
use crate::intersection::visible_fraction;
use crate::nav::{overlapping_sections, NavState};
use crate::navbar::NavbarStyle;
use crate::reveal::RevealState;
use crate::stepper::Stepper;
use crate::types::{ElementKey, ElementRect, Section, SectionId, Viewport};

/// Declared counter element.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub key: ElementKey,
    /// Value of the `data-target` attribute, if any
    pub data_target: Option<String>,
    /// Initial text content, used when there is no `data-target`
    pub text: String,
}

impl CounterSpec {
    pub fn new(key: impl Into<String>, data_target: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            key: ElementKey::new(key),
            data_target: data_target.map(str::to_string),
            text: text.into(),
        }
    }
}

/// Everything the tracker expects to find on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageManifest {
    /// Section ids in document order
    pub sections: Vec<SectionId>,
    /// Hrefs of the nav links (`#id`)
    pub nav_links: Vec<String>,
    pub reveal_targets: Vec<ElementKey>,
    pub counters: Vec<CounterSpec>,
}

impl PageManifest {
    /// Every element handle the page must register, with its role.
    pub fn required_elements(&self) -> Vec<(&'static str, ElementKey)> {
        let mut keys = vec![("scroll root", ElementKey::scroll_root())];
        keys.extend(self.sections.iter().map(|id| ("section", id.element_key())));
        keys.extend(self.reveal_targets.iter().map(|k| ("reveal target", k.clone())));
        keys.extend(self.counters.iter().map(|c| ("counter", c.key.clone())));
        keys
    }
}

/// Input to the tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The page scrolled; `layout` holds every section in document order
    Scrolled { scroll_y: f64, layout: Vec<Section> },
    /// An element's visible fraction changed
    Intersection { key: ElementKey, ratio: f64 },
    /// Time passed on the animation clock
    Tick { elapsed: Duration },
    /// An element left the page
    Removed { key: ElementKey },
    /// The page is going away
    Teardown,
}

/// Derived UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub nav: NavState,
    pub navbar: NavbarStyle,
    pub reveals: BTreeMap<ElementKey, RevealState>,
    pub counters: BTreeMap<ElementKey, CounterStepper>,
    overlap_reported: bool,
    torn_down: bool,
}

impl TrackerState {
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether any counter still wants ticks.
    pub fn needs_ticks(&self) -> bool {
        !self.torn_down && self.counters.values().any(CounterStepper::is_animating)
    }
}

/// Apply one event to the state.
pub fn reduce(mut state: TrackerState, event: &PageEvent, config: &TrackerConfig) -> TrackerState {
    if state.torn_down {
        return state;
    }

    match event {
        PageEvent::Scrolled { scroll_y, layout } => {
            if !state.overlap_reported {
                let overlaps = overlapping_sections(layout);
                if !overlaps.is_empty() {
                    tracing::warn!(
                        ?overlaps,
                        "Section ranges overlap; the first section in document order wins"
                    );
                    state.overlap_reported = true;
                }
            }

            let nav = state.nav.on_scroll(layout, *scroll_y, config.scroll_bias);
            if nav != state.nav {
                tracing::debug!(active = ?nav.active(), scroll_y, "Active section changed");
            }
            state.nav = nav;
            state.navbar = NavbarStyle::for_scroll(*scroll_y, config.navbar_raise_after);
        }
        PageEvent::Intersection { key, ratio } => {
            if let Some(reveal) = state.reveals.get_mut(key) {
                let next = reveal.observe(*ratio, config.reveal_threshold);
                if next != *reveal {
                    tracing::debug!(%key, ratio, "Revealed");
                }
                *reveal = next;
            } else if let Some(counter) = state.counters.get_mut(key) {
                if crate::intersection::crosses(*ratio, config.counter_threshold) && counter.start()
                {
                    tracing::debug!(%key, target = counter.target(), "Counter started");
                }
            } else {
                tracing::trace!(%key, "Intersection for untracked element");
            }
        }
        PageEvent::Tick { elapsed } => {
            for (key, counter) in state.counters.iter_mut() {
                if counter.is_animating() && counter.advance(*elapsed).is_done() {
                    tracing::debug!(%key, value = counter.value(), "Counter settled");
                }
            }
        }
        PageEvent::Removed { key } => {
            if let Some(mut counter) = state.counters.remove(key) {
                if counter.is_animating() {
                    counter.cancel();
                    tracing::debug!(%key, value = counter.value(), "Counter cancelled on removal");
                }
            }
            state.reveals.remove(key);
        }
        PageEvent::Teardown => {
            for counter in state.counters.values_mut() {
                counter.cancel();
            }
            state.torn_down = true;
            tracing::debug!("Scroll-state tracker torn down");
        }
    }

    state
}

/// Typed controller for one page session.
#[derive(Debug, Clone)]
pub struct ScrollStateTracker {
    config: TrackerConfig,
    sections: Vec<SectionId>,
    state: TrackerState,
}

impl ScrollStateTracker {
    /// Validate `manifest` against the registered `handles` and build the tracker.
    pub fn init<H>(
        config: TrackerConfig,
        manifest: &PageManifest,
        handles: &HashMap<ElementKey, H>,
    ) -> FolioResult<Self> {
        config.validate()?;

        let mut seen = HashSet::new();
        for (role, key) in manifest.required_elements() {
            if !seen.insert(key.clone()) {
                return Err(FolioError::DuplicateElement(key.0));
            }
            if !handles.contains_key(&key) {
                return Err(FolioError::MissingElement { role, key: key.0 });
            }
        }

        for href in &manifest.nav_links {
            match parse_anchor(href) {
                Some(id) if manifest.sections.contains(&id) => {}
                _ => return Err(FolioError::UnknownAnchor(href.clone())),
            }
        }

        let mut counters = BTreeMap::new();
        for spec in &manifest.counters {
            let target = parse_target(spec.key.as_str(), spec.data_target.as_deref(), &spec.text)?;
            counters.insert(
                spec.key.clone(),
                CounterStepper::new(target, config.counter_steps, config.counter_step_interval()),
            );
        }

        let reveals = manifest
            .reveal_targets
            .iter()
            .map(|key| (key.clone(), RevealState::Hidden))
            .collect();

        tracing::info!(
            sections = manifest.sections.len(),
            reveals = manifest.reveal_targets.len(),
            counters = manifest.counters.len(),
            "Scroll-state tracker initialized"
        );

        Ok(Self {
            config,
            sections: manifest.sections.clone(),
            state: TrackerState {
                reveals,
                counters,
                ..TrackerState::default()
            },
        })
    }

    pub fn dispatch(&mut self, event: PageEvent) -> &TrackerState {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &event, &self.config);
        &self.state
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Section ids in document order
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.state.nav.active()
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        self.state.nav.is_link_active(href)
    }

    pub fn navbar_style(&self) -> NavbarStyle {
        self.state.navbar
    }

    pub fn reveal_state(&self, key: &ElementKey) -> Option<RevealState> {
        self.state.reveals.get(key).copied()
    }

    pub fn counter(&self, key: &ElementKey) -> Option<&CounterStepper> {
        self.state.counters.get(key)
    }

    pub fn needs_ticks(&self) -> bool {
        self.state.needs_ticks()
    }

    /// Elements still waiting for an intersection.
    ///
    /// Measure them with [`Self::visible_fraction`].
    pub fn pending_observations(&self) -> Vec<ElementKey> {
        let reveals = self
            .state
            .reveals
            .iter()
            .filter(|(_, state)| !state.is_revealed())
            .map(|(key, _)| key.clone());
        let counters = self
            .state
            .counters
            .iter()
            .filter(|(_, counter)| counter.phase() == CounterPhase::Idle)
            .map(|(key, _)| key.clone());
        reveals.chain(counters).collect()
    }

    /// Visible fraction of a tracked element, measured with its own margin.
    pub fn visible_fraction(&self, key: &ElementKey, rect: ElementRect, viewport: Viewport) -> Option<f64> {
        let margin = if self.state.reveals.contains_key(key) {
            self.config.reveal_margin()
        } else if self.state.counters.contains_key(key) {
            self.config.counter_margin()
        } else {
            return None;
        };
        Some(visible_fraction(rect, viewport, margin))
    }
}
