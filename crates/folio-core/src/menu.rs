//! Mobile menu toggle and its hamburger icon.

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// State after clicking the hamburger
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// State after following one of the menu links
    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Class list of the link container
    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }

    /// Inline styles of the three hamburger bars, top to bottom.
    ///
    /// Open, the outer bars fold into an X and the middle one fades out.
    pub fn bar_styles(&self) -> [String; 3] {
        if self.open {
            [
                "transform: rotate(45deg) translateY(8px);".to_string(),
                "opacity: 0;".to_string(),
                "transform: rotate(-45deg) translateY(-8px);".to_string(),
            ]
        } else {
            [
                "transform: none;".to_string(),
                "opacity: 1;".to_string(),
                "transform: none;".to_string(),
            ]
        }
    }
}
