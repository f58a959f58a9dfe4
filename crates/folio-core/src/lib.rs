//! Folio Core Library
//!
//! Scroll-driven UI state and page effects for a single-page portfolio.
//!
//! ## Overview
//!
//! Everything here is browser-independent. A page adapter measures its
//! elements, turns scrolling, visibility changes and clock ticks into
//! [`PageEvent`]s, and renders whatever [`TrackerState`] comes back. The
//! cosmetic handlers (menu, smooth scroll, particles, typing) are small
//! values and functions the adapter calls directly.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::collections::HashMap;
//! use folio_core::{ElementKey, PageEvent, PageManifest, ScrollStateTracker, Section, TrackerConfig};
//!
//! let manifest = PageManifest {
//!     sections: vec!["home".into(), "about".into()],
//!     nav_links: vec!["#home".into(), "#about".into()],
//!     ..Default::default()
//! };
//! let handles: HashMap<ElementKey, ()> = manifest
//!     .required_elements()
//!     .into_iter()
//!     .map(|(_, key)| (key, ()))
//!     .collect();
//!
//! let mut tracker = ScrollStateTracker::init(TrackerConfig::default(), &manifest, &handles)?;
//! tracker.dispatch(PageEvent::Scrolled {
//!     scroll_y: 450.0,
//!     layout: vec![Section::new("home", 0.0, 500.0), Section::new("about", 500.0, 700.0)],
//! });
//! assert!(tracker.is_link_active("#about"));
//! ```

pub mod anchor;
pub mod coalesce;
pub mod config;
pub mod counter;
pub mod error;
pub mod intersection;
pub mod logging;
pub mod menu;
pub mod nav;
pub mod navbar;
pub mod particles;
pub mod reveal;
pub mod stepper;
pub mod tracker;
pub mod types;
pub mod typing;

// Re-exports
pub use coalesce::Coalescer;
pub use config::{EffectsConfig, PageConfig, TrackerConfig};
pub use counter::{CounterPhase, CounterStepper};
pub use error::{FolioError, FolioResult};
pub use intersection::RootMargin;
pub use menu::MenuState;
pub use nav::NavState;
pub use navbar::NavbarStyle;
pub use particles::Particle;
pub use reveal::{reveal_style, RevealState};
pub use stepper::{StepOutcome, Stepper, Ticker};
pub use tracker::{reduce, CounterSpec, PageEvent, PageManifest, ScrollStateTracker, TrackerState};
pub use types::*;
pub use typing::TypingEffect;
