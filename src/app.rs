use dioxus::prelude::*;

use crate::context::{ElementRegistry, InitError, SharedTracker};
use crate::pages::Portfolio;
use crate::theme;

/// Application routes.
///
/// - `/` - The portfolio, a single scrolling page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Portfolio {},
}

/// Root application component.
///
/// Provides global styles, the element registry, the tracker slot and routing.
#[component]
pub fn App() -> Element {
    let registry: Signal<ElementRegistry> = use_signal(ElementRegistry::new);
    let tracker: Signal<SharedTracker> = use_signal(|| None);
    let init_error: Signal<InitError> = use_signal(|| None);

    // Provide page context to all child components
    use_context_provider(|| registry);
    use_context_provider(|| tracker);
    use_context_provider(|| init_error);

    let stylesheet = use_hook(theme::stylesheet);

    use_hook(folio_core::logging::announce_page_loaded);

    rsx! {
        style { {stylesheet} }
        Router::<Route> {}
    }
}
