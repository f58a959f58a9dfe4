//! Core types for Folio

use serde::{Deserialize, Serialize};

/// Name of an element handle registered by the page.
///
/// Keys are what the page manifest refers to and what the shell uses to look
/// up mounted elements, so they must be unique per page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementKey(pub String);

impl ElementKey {
    /// Key of the scrolling root that hosts every section
    pub const SCROLL_ROOT: &'static str = "scroll-root";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn scroll_root() -> Self {
        Self::new(Self::SCROLL_ROOT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Identifier of an on-page section (its `id` attribute).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SectionId(pub String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The anchor href that navigates to this section (`#id`)
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }

    /// Element key the section registers its handle under
    pub fn element_key(&self) -> ElementKey {
        ElementKey::new(format!("section-{}", self.0))
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Measured section geometry, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    /// Offset from the top of the document
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: SectionId::new(id),
            top,
            height,
        }
    }

    /// Half-open range check: `top <= position < top + height`
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Element geometry relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Visible area of the scroll root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}
