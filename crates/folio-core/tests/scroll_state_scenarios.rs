//! End-to-end scenarios for the scroll-state tracker
//!
//! These tests drive a full tracker through scroll, intersection and clock
//! events the way the page adapter does, with simulated time.

use std::collections::HashMap;
use std::time::Duration;

use folio_core::{
    CounterPhase, CounterSpec, ElementKey, ElementRect, PageEvent, PageManifest, RevealState,
    ScrollStateTracker, Section, SectionId, TrackerConfig, Viewport,
};

// ============================================================================
// Helpers
// ============================================================================

fn portfolio_manifest() -> PageManifest {
    PageManifest {
        sections: ["home", "about", "projects", "contact"]
            .into_iter()
            .map(SectionId::new)
            .collect(),
        nav_links: ["#home", "#about", "#projects", "#contact"]
            .into_iter()
            .map(String::from)
            .collect(),
        reveal_targets: vec![
            ElementKey::new("about-content"),
            ElementKey::new("project-card-0"),
        ],
        counters: vec![
            CounterSpec::new("stat-projects", Some("150"), "0+"),
            CounterSpec::new("stat-years", None, "5+"),
        ],
    }
}

fn portfolio_layout() -> Vec<Section> {
    vec![
        Section::new("home", 0.0, 500.0),
        Section::new("about", 500.0, 700.0),
        Section::new("projects", 1200.0, 1000.0),
        Section::new("contact", 2200.0, 600.0),
    ]
}

fn tracker() -> ScrollStateTracker {
    let manifest = portfolio_manifest();
    let handles: HashMap<ElementKey, ()> = manifest
        .required_elements()
        .into_iter()
        .map(|(_, key)| (key, ()))
        .collect();
    ScrollStateTracker::init(TrackerConfig::default(), &manifest, &handles).unwrap()
}

fn scroll(tracker: &mut ScrollStateTracker, scroll_y: f64) {
    tracker.dispatch(PageEvent::Scrolled {
        scroll_y,
        layout: portfolio_layout(),
    });
}

fn active_links(tracker: &ScrollStateTracker) -> Vec<&'static str> {
    ["#home", "#about", "#projects", "#contact"]
        .into_iter()
        .filter(|href| tracker.is_link_active(href))
        .collect()
}

/// Tick 1ms at a time until the counter stops animating, recording values.
fn run_counter(tracker: &mut ScrollStateTracker, key: &ElementKey) -> Vec<u64> {
    let mut values = Vec::new();
    for _ in 0..10_000 {
        if !tracker.needs_ticks() {
            break;
        }
        tracker.dispatch(PageEvent::Tick {
            elapsed: Duration::from_millis(1),
        });
        values.push(tracker.counter(key).unwrap().value());
    }
    values
}

// ============================================================================
// Active Nav Link
// ============================================================================

#[test]
fn test_scroll_450_activates_about() {
    let mut tracker = tracker();
    scroll(&mut tracker, 450.0);
    assert_eq!(active_links(&tracker), vec!["#about"]);
}

#[test]
fn test_exactly_one_link_active_across_page() {
    let mut tracker = tracker();
    let mut y = 0.0;
    while y < 2600.0 {
        scroll(&mut tracker, y);
        assert_eq!(active_links(&tracker).len(), 1, "at scroll_y {}", y);
        y += 37.0;
    }
}

#[test]
fn test_past_last_section_keeps_previous_link() {
    let mut tracker = tracker();
    scroll(&mut tracker, 2300.0);
    assert_eq!(active_links(&tracker), vec!["#contact"]);
    // position 3200 is past every section
    scroll(&mut tracker, 3000.0);
    assert_eq!(active_links(&tracker), vec!["#contact"]);
}

#[test]
fn test_no_link_active_before_first_scroll() {
    let tracker = tracker();
    assert!(active_links(&tracker).is_empty());
}

// ============================================================================
// Reveal
// ============================================================================

#[test]
fn test_reveal_at_15_percent_not_at_5() {
    let mut tracker = tracker();
    let shown = ElementKey::new("about-content");
    let hidden = ElementKey::new("project-card-0");

    tracker.dispatch(PageEvent::Intersection { key: shown.clone(), ratio: 0.15 });
    tracker.dispatch(PageEvent::Intersection { key: hidden.clone(), ratio: 0.05 });

    assert_eq!(tracker.reveal_state(&shown), Some(RevealState::Revealed));
    assert_eq!(tracker.reveal_state(&hidden), Some(RevealState::Hidden));
}

#[test]
fn test_revealed_element_stays_revealed() {
    let mut tracker = tracker();
    let key = ElementKey::new("about-content");
    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 0.5 });

    for y in [0.0, 900.0, 2500.0, 0.0] {
        scroll(&mut tracker, y);
        tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 0.0 });
        assert_eq!(tracker.reveal_state(&key), Some(RevealState::Revealed));
    }
}

/// Measure every pending element at `rect` the way the page adapter does.
fn observe_all(tracker: &mut ScrollStateTracker, rect: ElementRect, viewport: Viewport) {
    for key in tracker.pending_observations() {
        if let Some(ratio) = tracker.visible_fraction(&key, rect, viewport) {
            tracker.dispatch(PageEvent::Intersection { key, ratio });
        }
    }
}

#[test]
fn test_growing_viewport_reveals_without_scrolling() {
    let mut tracker = tracker();
    let card = ElementKey::new("project-card-0");
    let stat = ElementKey::new("stat-projects");
    // same place on the page, only the window height changes
    let rect = ElementRect::new(600.0, 200.0);

    observe_all(&mut tracker, rect, Viewport::new(600.0));
    assert_eq!(tracker.reveal_state(&card), Some(RevealState::Hidden));
    assert_eq!(tracker.counter(&stat).unwrap().phase(), CounterPhase::Idle);

    observe_all(&mut tracker, rect, Viewport::new(1000.0));
    assert_eq!(tracker.reveal_state(&card), Some(RevealState::Revealed));
    assert_eq!(tracker.counter(&stat).unwrap().phase(), CounterPhase::Animating);
    assert!(!tracker.pending_observations().contains(&card));
}

// ============================================================================
// Counter
// ============================================================================

#[test]
fn test_counter_150_settles_at_150_plus() {
    let mut tracker = tracker();
    let key = ElementKey::new("stat-projects");
    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 0.6 });

    let values = run_counter(&mut tracker, &key);
    assert!(values.iter().all(|v| *v <= 150), "never exceeds the target");
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "monotonic");

    let counter = tracker.counter(&key).unwrap();
    assert_eq!(counter.phase(), CounterPhase::Settled);
    assert_eq!(counter.display(), "150+");
}

#[test]
fn test_counter_below_half_visible_stays_idle() {
    let mut tracker = tracker();
    let key = ElementKey::new("stat-projects");
    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 0.4 });
    assert!(!tracker.needs_ticks());
    assert_eq!(tracker.counter(&key).unwrap().phase(), CounterPhase::Idle);
}

#[test]
fn test_counter_target_falls_back_to_text() {
    let mut tracker = tracker();
    let key = ElementKey::new("stat-years");
    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 1.0 });
    run_counter(&mut tracker, &key);
    assert_eq!(tracker.counter(&key).unwrap().display(), "5+");
}

#[test]
fn test_second_trigger_after_settle_changes_nothing() {
    let mut tracker = tracker();
    let key = ElementKey::new("stat-projects");
    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 1.0 });
    run_counter(&mut tracker, &key);
    let settled = tracker.state().clone();

    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 1.0 });
    assert!(!tracker.needs_ticks(), "no second ramp is scheduled");
    assert_eq!(tracker.state(), &settled);
}

#[test]
fn test_retrigger_mid_ramp_does_not_restart() {
    let mut tracker = tracker();
    let key = ElementKey::new("stat-projects");
    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 1.0 });
    tracker.dispatch(PageEvent::Tick { elapsed: Duration::from_millis(40) });
    assert_eq!(tracker.counter(&key).unwrap().value(), 40);

    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 1.0 });
    assert_eq!(tracker.counter(&key).unwrap().value(), 40);
}

#[test]
fn test_ramp_takes_about_two_hundred_steps_regardless_of_target() {
    let manifest = PageManifest {
        counters: vec![
            CounterSpec::new("small", Some("150"), ""),
            CounterSpec::new("large", Some("20000"), ""),
        ],
        ..Default::default()
    };
    let handles: HashMap<ElementKey, ()> = manifest
        .required_elements()
        .into_iter()
        .map(|(_, key)| (key, ()))
        .collect();
    let mut tracker =
        ScrollStateTracker::init(TrackerConfig::default(), &manifest, &handles).unwrap();

    let large = ElementKey::new("large");
    tracker.dispatch(PageEvent::Intersection { key: large.clone(), ratio: 1.0 });
    let steps = run_counter(&mut tracker, &large).len();
    assert_eq!(steps, 200);
}

#[test]
fn test_ticks_interleave_with_scrolling() {
    let mut tracker = tracker();
    let key = ElementKey::new("stat-projects");
    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio: 1.0 });

    let mut last = 0;
    for y in (0..300).map(|i| i as f64 * 5.0) {
        scroll(&mut tracker, y);
        tracker.dispatch(PageEvent::Tick { elapsed: Duration::from_millis(1) });
        let value = tracker.counter(&key).unwrap().value();
        assert!(value >= last);
        last = value;
    }
    assert_eq!(last, 150);
}
