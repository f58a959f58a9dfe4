//! Smooth-scroll targets for in-page anchor links.

use crate::types::SectionId;

/// Section id referenced by an in-page href (`#about` -> `about`).
///
/// Returns `None` for external links and the bare `#`.
pub fn parse_anchor(href: &str) -> Option<SectionId> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(SectionId::new(id))
}

/// Scroll offset that puts a section `offset` px below the top edge.
pub fn scroll_target(section_top: f64, offset: f64) -> f64 {
    (section_top - offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_anchor() {
        assert_eq!(parse_anchor("#contact"), Some(SectionId::new("contact")));
        assert_eq!(parse_anchor("#"), None);
        assert_eq!(parse_anchor("https://example.com/#x"), None);
    }

    #[test]
    fn test_scroll_target_clamps_at_top() {
        assert_eq!(scroll_target(500.0, 70.0), 430.0);
        assert_eq!(scroll_target(20.0, 70.0), 0.0);
    }
}
