//! In-page anchor link with smooth scrolling.

use dioxus::prelude::*;
use folio_core::anchor::parse_anchor;

use crate::adapter::scroll_to_section;
use crate::context::{get_page_config, use_element_registry};

#[derive(Props, Clone, PartialEq)]
pub struct AnchorLinkProps {
    /// Target, e.g. `#about`
    #[props(into)]
    pub href: String,
    #[props(default, into)]
    pub class: String,
    /// Called after the link is followed
    #[props(default = None)]
    pub on_follow: Option<EventHandler<()>>,
    pub children: Element,
}

/// Link that smooth-scrolls to a section instead of jumping.
///
/// Hrefs that do not name a section fall back to plain navigation.
#[component]
pub fn AnchorLink(props: AnchorLinkProps) -> Element {
    let registry = use_element_registry();
    let offset = get_page_config().tracker.anchor_offset;
    let href = props.href.clone();
    let on_follow = props.on_follow;

    let follow = move |evt: MouseEvent| {
        let Some(id) = parse_anchor(&href) else {
            return;
        };
        evt.prevent_default();
        if let Some(handler) = on_follow {
            handler.call(());
        }
        spawn(scroll_to_section(registry, id, offset));
    };

    rsx! {
        a {
            class: "{props.class}",
            href: "{props.href}",
            onclick: follow,
            {props.children}
        }
    }
}
