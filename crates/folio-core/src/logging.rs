//! Logging setup and the page-load diagnostics.
//!
//! ```ignore
//! folio_core::logging::init("info");
//! folio_core::logging::announce_page_loaded();
//! ```
//!
//! `RUST_LOG` takes precedence over the filter passed to [`init`]:
//!
//! ```bash
//! RUST_LOG=folio_core=debug folio-desktop
//! ```

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// The three lines logged once the page has loaded.
pub const PAGE_LOADED_LINES: [&str; 3] = [
    "Portfolio loaded successfully!",
    "Customize this portfolio by editing the page content and theme.",
    "For help, refer to the setup guide.",
];

pub fn announce_page_loaded() {
    for line in PAGE_LOADED_LINES {
        tracing::info!("{}", line);
    }
}
