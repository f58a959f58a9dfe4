//! Visible-fraction math for elements inside the scroll root.
//!
//! Mirrors what an intersection observer reports along the vertical axis:
//! the root box is the viewport grown (or shrunk, for negative values) by a
//! root margin, and the ratio is the share of the element's height that
//! falls inside that box.

use crate::types::{ElementRect, Viewport};

/// Vertical root margin in pixels. Negative values shrink the root.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RootMargin {
    pub top: f64,
    pub bottom: f64,
}

impl RootMargin {
    pub fn bottom(bottom: f64) -> Self {
        Self { top: 0.0, bottom }
    }
}

/// Share of `rect` visible inside the viewport adjusted by `margin`, in `[0, 1]`.
pub fn visible_fraction(rect: ElementRect, viewport: Viewport, margin: RootMargin) -> f64 {
    let root_top = -margin.top;
    let root_bottom = viewport.height + margin.bottom;
    if root_bottom <= root_top {
        return 0.0;
    }

    if rect.height <= 0.0 {
        // zero-height elements count as fully visible while inside the root
        return if rect.top >= root_top && rect.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }

    let overlap = rect.bottom().min(root_bottom) - rect.top.max(root_top);
    (overlap / rect.height).clamp(0.0, 1.0)
}

/// Whether a ratio has crossed `threshold` into view.
pub fn crosses(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}
