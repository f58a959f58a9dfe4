//! Page configuration.
//!
//! Every tunable constant of the page lives here with its default. A JSON
//! file can override any subset of fields; missing fields keep the default.
//!
//! ```json
//! {
//!   "tracker": { "scroll_bias": 150.0 },
//!   "effects": { "typing_enabled": true }
//! }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::intersection::RootMargin;

/// Default offset added to the scroll position before matching sections.
pub const DEFAULT_SCROLL_BIAS: f64 = 200.0;

/// Default number of steps a counter ramp is normalized to.
pub const DEFAULT_COUNTER_STEPS: u64 = 200;

/// Default interval between counter steps (ms).
pub const DEFAULT_COUNTER_STEP_INTERVAL_MS: u64 = 1;

/// Default number of hero particles.
pub const DEFAULT_PARTICLE_COUNT: usize = 30;

/// Scroll-state tracker settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Added to the scroll offset before matching a section (px)
    pub scroll_bias: f64,
    /// A counter reaches its target in roughly this many steps
    pub counter_steps: u64,
    /// Time between two counter steps (ms)
    pub counter_step_interval_ms: u64,
    /// Visible fraction that starts a counter
    pub counter_threshold: f64,
    /// Visible fraction that reveals a fade-in target
    pub reveal_threshold: f64,
    /// Bottom root margin for reveals (px, negative shrinks the viewport)
    pub reveal_bottom_margin: f64,
    /// Scroll offset past which the navbar switches to its raised style (px)
    pub navbar_raise_after: f64,
    /// Distance kept between a scrolled-to section and the top edge (px)
    pub anchor_offset: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            scroll_bias: DEFAULT_SCROLL_BIAS,
            counter_steps: DEFAULT_COUNTER_STEPS,
            counter_step_interval_ms: DEFAULT_COUNTER_STEP_INTERVAL_MS,
            counter_threshold: 0.5,
            reveal_threshold: 0.1,
            reveal_bottom_margin: -100.0,
            navbar_raise_after: 100.0,
            anchor_offset: 70.0,
        }
    }
}

impl TrackerConfig {
    pub fn counter_step_interval(&self) -> Duration {
        Duration::from_millis(self.counter_step_interval_ms)
    }

    pub fn reveal_margin(&self) -> RootMargin {
        RootMargin::bottom(self.reveal_bottom_margin)
    }

    pub fn counter_margin(&self) -> RootMargin {
        RootMargin::default()
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.counter_steps == 0 {
            return Err(FolioError::InvalidConfig(
                "counter_steps must be at least 1".to_string(),
            ));
        }
        if self.counter_step_interval_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "counter_step_interval_ms must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("counter_threshold", self.counter_threshold),
            ("reveal_threshold", self.reveal_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(FolioError::InvalidConfig(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("scroll_bias", self.scroll_bias),
            ("reveal_bottom_margin", self.reveal_bottom_margin),
            ("navbar_raise_after", self.navbar_raise_after),
            ("anchor_offset", self.anchor_offset),
        ] {
            if !value.is_finite() {
                return Err(FolioError::InvalidConfig(format!(
                    "{} must be a finite number",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Decorative effects settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Number of floating particles in the hero
    pub particle_count: usize,
    /// Type the hero subtitle in character by character
    pub typing_enabled: bool,
    /// Time between two typed characters (ms)
    pub typing_interval_ms: u64,
    /// Delay before typing starts (ms)
    pub typing_delay_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            typing_enabled: false,
            typing_interval_ms: 50,
            typing_delay_ms: 500,
        }
    }
}

impl EffectsConfig {
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

/// Complete page configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub tracker: TrackerConfig,
    pub effects: EffectsConfig,
}

impl PageConfig {
    /// Load a config file and validate it.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: PageConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!("Loaded page config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> FolioResult<()> {
        self.tracker.validate()?;
        if self.effects.typing_enabled && self.effects.typing_interval_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "typing_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
