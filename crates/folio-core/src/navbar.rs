//! Navbar background that firms up once the page is scrolled.

/// Navbar appearance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavbarStyle {
    /// At (or near) the top of the page
    #[default]
    Resting,
    /// Scrolled past the raise threshold
    Raised,
}

impl NavbarStyle {
    /// Style for a scroll offset; raised strictly past `raise_after`.
    pub fn for_scroll(scroll_y: f64, raise_after: f64) -> Self {
        if scroll_y > raise_after {
            NavbarStyle::Raised
        } else {
            NavbarStyle::Resting
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarStyle::Resting => "rgba(255, 255, 255, 0.95)",
            NavbarStyle::Raised => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarStyle::Resting => "0 2px 10px rgba(0, 0, 0, 0.1)",
            NavbarStyle::Raised => "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    }

    pub fn style(&self) -> String {
        format!(
            "background-color: {}; box-shadow: {};",
            self.background(),
            self.box_shadow()
        )
    }
}
