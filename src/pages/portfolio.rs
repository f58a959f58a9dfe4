//! Portfolio page - the whole site on one scrolling page.
//!
//! Owns the scroll root. Once every element declared in the page manifest
//! has mounted, the scroll-state tracker is built; from then on each scroll
//! or resize re-measures the page and feeds the tracker.

use dioxus::prelude::*;
use folio_core::{Coalescer, ElementKey, FolioError, FolioResult, PageEvent, ScrollStateTracker};

use crate::adapter::{self, SCROLL_ROOT_ID};
use crate::components::{AnchorLink, Hero, NavBar, PageSection, Reveal, StatCounter};
use crate::content::{
    self, ABOUT_CONTENT_KEY, ABOUT_PARAGRAPHS, CONTACT_CONTENT_KEY, CONTACT_EMAIL, OWNER_NAME,
    PROJECTS, SKILLS, STATS,
};
use crate::context::{
    get_page_config, register, use_element_registry, use_init_error, use_tracker,
};

/// Portfolio page component.
#[component]
pub fn Portfolio() -> Element {
    let registry = use_element_registry();
    let mut tracker = use_tracker();
    let ticker: Signal<Option<Task>> = use_signal(|| None);
    let sync_gate = use_signal(Coalescer::new);
    let mut init_error = use_init_error();

    let config = use_hook(get_page_config);
    let manifest = use_hook(content::manifest);

    // Install a freshly built tracker and take the first measurement
    let mut install = move |result: FolioResult<ScrollStateTracker>, final_attempt: bool| {
        match result {
            Ok(built) => {
                tracker.set(Some(built));
                adapter::request_sync(registry, tracker, sync_gate, ticker);
            }
            // still mounting
            Err(FolioError::MissingElement { .. }) if !final_attempt => {}
            Err(e) => {
                tracing::error!("Page configuration error: {}", e);
                init_error.set(Some(e.to_string()));
            }
        }
    };

    // Retry whenever an element registers
    {
        let config = config.clone();
        let manifest = manifest.clone();
        use_effect(move || {
            let handles = registry.read();
            if tracker.peek().is_some() || init_error.peek().is_some() {
                return;
            }
            let result = adapter::try_init(&config.tracker, &manifest, &handles);
            drop(handles);
            install(result, false);
        });
    }

    // Report whatever is still missing once the page had time to mount
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(adapter::MOUNT_GRACE).await;
            if tracker.peek().is_some() || init_error.peek().is_some() {
                return;
            }
            let result = adapter::try_init(&config.tracker, &manifest, &registry.peek());
            install(result, true);
        });
    });

    // Cancel pending counter steps when the page goes away
    use_drop(move || {
        if let Ok(Some(task)) = ticker.try_read().map(|task| *task) {
            task.cancel();
        }
        if let Ok(mut slot) = tracker.try_write() {
            if let Some(tracker) = slot.as_mut() {
                tracker.dispatch(PageEvent::Teardown);
            }
        }
    });

    let on_scroll = move |_: ScrollEvent| {
        adapter::request_sync(registry, tracker, sync_gate, ticker);
    };
    let on_resize = move |_: ResizeEvent| {
        adapter::request_sync(registry, tracker, sync_gate, ticker);
    };

    rsx! {
        div {
            id: SCROLL_ROOT_ID,
            class: "scroll-root",
            onscroll: on_scroll,
            onresize: on_resize,
            onmounted: register(registry, ElementKey::scroll_root()),

            NavBar {}

            if let Some(message) = init_error() {
                div { class: "config-error", "Page configuration error: {message}" }
            }

            Hero {}

            PageSection { id: "about", class: "about",
                div { class: "container",
                    h2 { class: "section-title", "About Me" }
                    Reveal { element_key: ABOUT_CONTENT_KEY, class: "about-content",
                        div { class: "about-text",
                            for paragraph in ABOUT_PARAGRAPHS.iter() {
                                p { "{paragraph}" }
                            }
                        }
                        div { class: "about-stats",
                            for stat in STATS.iter() {
                                StatCounter {
                                    key: "{stat.key}",
                                    counter_key: stat.key,
                                    target: stat.target,
                                    text: stat.text,
                                    label: stat.label,
                                }
                            }
                        }
                    }
                }
            }

            PageSection { id: "projects", class: "projects",
                div { class: "container",
                    h2 { class: "section-title", "Featured Projects" }
                    div { class: "projects-grid",
                        for (index, project) in PROJECTS.iter().enumerate() {
                            Reveal {
                                key: "{index}",
                                element_key: content::project_key(index),
                                class: "project-card",
                                h3 { "{project.title}" }
                                p { "{project.description}" }
                                div { class: "project-tags",
                                    for tag in project.tags.iter() {
                                        span { class: "tag", "{tag}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PageSection { id: "skills", class: "skills",
                div { class: "container",
                    h2 { class: "section-title", "Skills" }
                    div { class: "skills-grid",
                        for (index, category) in SKILLS.iter().enumerate() {
                            Reveal {
                                key: "{index}",
                                element_key: content::skill_key(index),
                                class: "skill-category",
                                h3 { "{category.name}" }
                                ul {
                                    for skill in category.skills.iter() {
                                        li { "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            PageSection { id: "contact", class: "contact",
                div { class: "container",
                    h2 { class: "section-title", "Get In Touch" }
                    Reveal { element_key: CONTACT_CONTENT_KEY, class: "contact-content",
                        p { "Have a project in mind or just want to say hi? My inbox is open." }
                        a { class: "btn btn-primary", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                    }
                }
            }

            footer { class: "footer",
                p { "© {OWNER_NAME}" }
                AnchorLink { href: "#home", class: "back-to-top", "Back to top" }
            }
        }
    }
}
