//! UI Components for Folio.
//!
//! Every component that takes part in scroll tracking registers its mounted
//! element under a key from the page manifest.

mod anchor_link;
mod hero;
mod nav_bar;
mod page_section;
mod reveal;
mod stat_counter;

pub use anchor_link::AnchorLink;
pub use hero::Hero;
pub use nav_bar::NavBar;
pub use page_section::PageSection;
pub use reveal::Reveal;
pub use stat_counter::StatCounter;
