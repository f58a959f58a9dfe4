//! Portfolio content.
//!
//! Everything the page renders, plus the manifest the scroll-state tracker
//! checks the mounted elements against.

use folio_core::{CounterSpec, ElementKey, PageManifest, SectionId};

/// Navigation entries, in page order.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

pub const OWNER_NAME: &str = "Alex Morgan";
pub const HERO_SUBTITLE: &str = "Systems engineer building fast, reliable software";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I design and build backend services, command-line tools and the occasional \
     desktop app. Most of my work these days is in Rust.",
    "I care about software that starts fast, fails loudly and stays out of the way.",
];

pub struct Stat {
    pub key: &'static str,
    /// `data-target` attribute; `None` falls back to the initial text
    pub target: Option<&'static str>,
    pub text: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { key: "stat-projects", target: Some("50"), text: "0+", label: "Projects Completed" },
    Stat { key: "stat-years", target: Some("5"), text: "0+", label: "Years Experience" },
    Stat { key: "stat-clients", target: Some("150"), text: "0+", label: "Happy Clients" },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Log Shipper",
        description: "Tails thousands of files and forwards structured events with bounded memory.",
        tags: &["Rust", "Tokio", "Tracing"],
    },
    Project {
        title: "Sync Engine",
        description: "Local-first task lists that sync peer to peer over gossip.",
        tags: &["Rust", "CRDT", "Dioxus"],
    },
    Project {
        title: "Layout Optimizer",
        description: "Simulated annealing search for ergonomic keyboard layouts.",
        tags: &["Rust", "Rayon"],
    },
];

pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory { name: "Languages", skills: &["Rust", "Go", "TypeScript", "SQL"] },
    SkillCategory { name: "Infrastructure", skills: &["Linux", "Kubernetes", "Postgres"] },
    SkillCategory { name: "Tooling", skills: &["Git", "Nix", "Grafana"] },
];

pub const CONTACT_EMAIL: &str = "alex@example.com";

pub fn project_key(index: usize) -> String {
    format!("project-card-{}", index)
}

pub fn skill_key(index: usize) -> String {
    format!("skill-category-{}", index)
}

pub const ABOUT_CONTENT_KEY: &str = "about-content";
pub const CONTACT_CONTENT_KEY: &str = "contact-content";

/// Section ids in document order.
pub fn section_ids() -> Vec<SectionId> {
    NAV_ITEMS
        .iter()
        .filter_map(|(href, _)| folio_core::anchor::parse_anchor(href))
        .collect()
}

/// What the rendered page is expected to contain.
pub fn manifest() -> PageManifest {
    let mut reveal_targets = vec![ElementKey::new(ABOUT_CONTENT_KEY)];
    reveal_targets.extend((0..PROJECTS.len()).map(|i| ElementKey::new(project_key(i))));
    reveal_targets.extend((0..SKILLS.len()).map(|i| ElementKey::new(skill_key(i))));
    reveal_targets.push(ElementKey::new(CONTACT_CONTENT_KEY));

    PageManifest {
        sections: section_ids(),
        nav_links: NAV_ITEMS.iter().map(|(href, _)| href.to_string()).collect(),
        reveal_targets,
        counters: STATS
            .iter()
            .map(|stat| CounterSpec::new(stat.key, stat.target, stat.text))
            .collect(),
    }
}
