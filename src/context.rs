//! Page context for Folio.
//!
//! Provides the element registry, the scroll-state tracker and the page
//! configuration to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let registry = use_element_registry();
//! rsx! { div { onmounted: register(registry, key), ... } }
//! ```

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{ElementKey, PageConfig, PageEvent, ScrollStateTracker};

/// Mounted element handles by key.
///
/// This is the injected map the tracker validates its manifest against.
pub type ElementRegistry = HashMap<ElementKey, Rc<MountedData>>;

/// Tracker slot; `None` until every declared element has mounted.
pub type SharedTracker = Option<ScrollStateTracker>;

/// Why the tracker could not start, once that is known.
pub type InitError = Option<String>;

/// Get the page configuration (set from the command line).
pub fn get_page_config() -> PageConfig {
    crate::get_page_config()
}

/// Hook to access the element registry.
pub fn use_element_registry() -> Signal<ElementRegistry> {
    use_context::<Signal<ElementRegistry>>()
}

/// Hook to access the scroll-state tracker.
pub fn use_tracker() -> Signal<SharedTracker> {
    use_context::<Signal<SharedTracker>>()
}

/// Hook to access the tracker start-up error.
pub fn use_init_error() -> Signal<InitError> {
    use_context::<Signal<InitError>>()
}

/// `onmounted` handler that stores the element under `key`.
pub fn register(
    mut registry: Signal<ElementRegistry>,
    key: ElementKey,
) -> impl FnMut(MountedEvent) + 'static {
    move |evt: MountedEvent| {
        tracing::trace!(%key, "Element mounted");
        registry.write().insert(key.clone(), evt.data());
    }
}

/// Drop an element's handle and tell the tracker it is gone.
///
/// Runs during unmount, when the signals may already be gone.
pub fn unregister(
    mut registry: Signal<ElementRegistry>,
    mut tracker: Signal<SharedTracker>,
    key: ElementKey,
) {
    if let Ok(mut handles) = registry.try_write() {
        handles.remove(&key);
    }
    if let Ok(mut slot) = tracker.try_write() {
        if let Some(tracker) = slot.as_mut() {
            tracker.dispatch(PageEvent::Removed { key });
        }
    }
}
