//! Fade-in wrapper for cards and content blocks.

use dioxus::prelude::*;
use folio_core::{reveal_style, ElementKey};

use crate::context::{register, unregister, use_element_registry, use_init_error, use_tracker};

/// Content block that fades and slides in the first time it scrolls into view.
///
/// The block starts hidden. If the tracker fails to start it renders fully
/// visible instead.
#[component]
pub fn Reveal(
    #[props(into)] element_key: String,
    #[props(into)] class: String,
    children: Element,
) -> Element {
    let registry = use_element_registry();
    let tracker = use_tracker();
    let init_error = use_init_error();
    let key = ElementKey::new(element_key);

    let state = tracker.read().as_ref().and_then(|t| t.reveal_state(&key));
    let style = reveal_style(state, init_error.read().is_some());

    use_drop({
        let key = key.clone();
        move || unregister(registry, tracker, key)
    });

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmounted: register(registry, key),
            {children}
        }
    }
}
