//! Top-level page section registered with the tracker.

use dioxus::prelude::*;
use folio_core::SectionId;

use crate::context::{register, use_element_registry};

/// A navigable section; `id` is what the nav links point at.
#[component]
pub fn PageSection(
    #[props(into)] id: String,
    #[props(into)] class: String,
    children: Element,
) -> Element {
    let registry = use_element_registry();
    let key = SectionId::new(id.clone()).element_key();

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            onmounted: register(registry, key),
            {children}
        }
    }
}
