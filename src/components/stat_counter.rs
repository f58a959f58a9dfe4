//! Animated statistic.

use dioxus::prelude::*;
use folio_core::{CounterPhase, ElementKey};

use crate::context::{register, unregister, use_element_registry, use_tracker};

#[derive(Props, Clone, PartialEq)]
pub struct StatCounterProps {
    pub counter_key: &'static str,
    /// Rendered as `data-target`
    #[props(default = None)]
    pub target: Option<&'static str>,
    /// Text shown before the ramp starts
    pub text: &'static str,
    pub label: &'static str,
}

/// Number that counts up from zero once half of it is on screen.
#[component]
pub fn StatCounter(props: StatCounterProps) -> Element {
    let registry = use_element_registry();
    let tracker = use_tracker();
    let key = ElementKey::new(props.counter_key);

    let display = tracker
        .read()
        .as_ref()
        .and_then(|t| t.counter(&key))
        .filter(|counter| counter.phase() != CounterPhase::Idle)
        .map(|counter| counter.display())
        .unwrap_or_else(|| props.text.to_string());

    use_drop({
        let key = key.clone();
        move || unregister(registry, tracker, key)
    });

    rsx! {
        div { class: "stat",
            h3 {
                "data-target": props.target,
                onmounted: register(registry, key),
                "{display}"
            }
            p { "{props.label}" }
        }
    }
}
