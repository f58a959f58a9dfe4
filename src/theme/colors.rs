//! Color palette for the portfolio theme.
//!
//! Exposed to the stylesheet as CSS custom properties.

pub const PRIMARY: &str = "#2563eb";
pub const PRIMARY_DARK: &str = "#1d4ed8";
pub const ACCENT: &str = "#f59e0b";

pub const TEXT_DARK: &str = "#1f2937";
pub const TEXT_LIGHT: &str = "#6b7280";

pub const BG_LIGHT: &str = "#f9fafb";
pub const BG_WHITE: &str = "#ffffff";
pub const BORDER: &str = "#e5e7eb";

pub const DANGER: &str = "#dc2626";

/// Palette as `(custom property, value)` pairs.
pub const PALETTE: &[(&str, &str)] = &[
    ("--primary", PRIMARY),
    ("--primary-dark", PRIMARY_DARK),
    ("--accent", ACCENT),
    ("--text-dark", TEXT_DARK),
    ("--text-light", TEXT_LIGHT),
    ("--bg-light", BG_LIGHT),
    ("--bg-white", BG_WHITE),
    ("--border", BORDER),
    ("--danger", DANGER),
];
