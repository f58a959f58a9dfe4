//! Theme for Folio: palette and global stylesheet.

mod colors;
mod styles;

use folio_core::particles::FLOAT_KEYFRAMES;

/// Complete stylesheet: palette variables, global rules and particle keyframes.
pub fn stylesheet() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in colors::PALETTE {
        css.push_str(&format!("  {}: {};\n", name, value));
    }
    css.push_str("}\n");
    css.push_str(styles::GLOBAL_STYLES);
    css.push_str(FLOAT_KEYFRAMES);
    css
}
