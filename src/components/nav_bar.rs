//! Navigation Bar Component
//!
//! Fixed header with the owner's name, section links and a hamburger toggle
//! for narrow windows. The background firms up once the page scrolls and
//! the link of the section under the fold is highlighted.

use dioxus::prelude::*;
use folio_core::MenuState;

use crate::components::AnchorLink;
use crate::content::{NAV_ITEMS, OWNER_NAME};
use crate::context::use_tracker;

#[component]
pub fn NavBar() -> Element {
    let tracker = use_tracker();
    let mut menu = use_signal(MenuState::default);

    let (navbar_style, active_href) = {
        let slot = tracker.read();
        let style = slot.as_ref().map(|t| t.navbar_style()).unwrap_or_default();
        let active = NAV_ITEMS
            .iter()
            .map(|(href, _)| *href)
            .find(|href| slot.as_ref().is_some_and(|t| t.is_link_active(href)));
        (style, active)
    };
    let bars = menu().bar_styles();

    let close_menu = move |_: ()| {
        let next = menu.peek().closed();
        menu.set(next);
    };

    rsx! {
        nav { class: "navbar", style: "{navbar_style.style()}",
            div { class: "nav-container",
                AnchorLink { href: "#home", class: "nav-logo", "{OWNER_NAME}" }

                ul { class: menu().links_class(),
                    for (href, label) in NAV_ITEMS.iter() {
                        li { key: "{href}",
                            AnchorLink {
                                href: *href,
                                class: if active_href == Some(*href) { "nav-link active" } else { "nav-link" },
                                on_follow: close_menu,
                                "{label}"
                            }
                        }
                    }
                }

                button {
                    class: "nav-toggle",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| menu.set(menu().toggled()),
                    for style in bars.iter() {
                        span { style: "{style}" }
                    }
                }
            }
        }
    }
}
