//! Hero Section Component
//!
//! Name, subtitle and call-to-action links over a field of floating
//! particles. The subtitle can optionally be typed in.

use std::time::Instant;

use dioxus::prelude::*;
use folio_core::particles::{self, Particle};
use folio_core::{Stepper, Ticker, TypingEffect};

use crate::components::{AnchorLink, PageSection};
use crate::content::{HERO_SUBTITLE, OWNER_NAME};
use crate::context::get_page_config;

#[component]
pub fn Hero() -> Element {
    rsx! {
        PageSection { id: "home", class: "hero",
            ParticleField {}
            div { class: "hero-content",
                h1 { class: "hero-title", "Hi, I'm "
                    span { class: "highlight", "{OWNER_NAME}" }
                }
                TypingSubtitle { text: HERO_SUBTITLE }
                div { class: "hero-buttons",
                    AnchorLink { href: "#projects", class: "btn btn-primary", "View My Work" }
                    AnchorLink { href: "#contact", class: "btn btn-secondary", "Get In Touch" }
                }
            }
        }
    }
}

/// Decorative particles, generated once per page load.
#[component]
fn ParticleField() -> Element {
    let count = get_page_config().effects.particle_count;
    let particles: Vec<Particle> = use_hook(|| particles::generate(count, &mut rand::rng()));

    rsx! {
        div { class: "particle-field",
            for (index, particle) in particles.iter().enumerate() {
                div { key: "{index}", class: "particle", style: "{particle.style()}" }
            }
        }
    }
}

/// Hero subtitle, typed in one character at a time when enabled.
#[component]
fn TypingSubtitle(text: &'static str) -> Element {
    let effects = get_page_config().effects;
    let enabled = effects.typing_enabled;
    let mut shown = use_signal(|| if enabled { String::new() } else { text.to_string() });

    use_hook(move || {
        if !effects.typing_enabled {
            return;
        }
        spawn(async move {
            tokio::time::sleep(effects.typing_delay()).await;
            let mut typing = TypingEffect::new(text, effects.typing_interval());
            let mut clock = Ticker::new();
            clock.tick(Instant::now());
            loop {
                tokio::time::sleep(effects.typing_interval()).await;
                let outcome = typing.advance(clock.tick(Instant::now()));
                shown.set(typing.visible());
                if outcome.is_done() {
                    break;
                }
            }
            tracing::debug!("Subtitle typing finished");
        });
    });

    rsx! {
        p { class: "hero-subtitle", "{shown}" }
    }
}
