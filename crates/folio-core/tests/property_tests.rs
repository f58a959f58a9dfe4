//! Property-based tests for the scroll-state tracker
//!
//! Uses proptest to verify the selection, reveal and counter invariants
//! over arbitrary layouts, event orders and tick sizes.

use std::collections::HashMap;
use std::time::Duration;

use folio_core::stepper::Stepper;
use folio_core::{
    CounterStepper, ElementKey, PageEvent, PageManifest, RevealState, ScrollStateTracker, Section,
    SectionId, TrackerConfig,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Contiguous, non-overlapping sections starting at 0
fn layout_strategy() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec(1.0..2000.0f64, 1..8).prop_map(|heights| {
        let mut top = 0.0;
        heights
            .into_iter()
            .enumerate()
            .map(|(i, height)| {
                let section = Section::new(format!("s{}", i), top, height);
                top += height;
                section
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum RevealOp {
    Scroll(f64),
    Observe(f64),
}

fn reveal_ops_strategy() -> impl Strategy<Value = Vec<RevealOp>> {
    prop::collection::vec(
        prop_oneof![
            (0.0..5000.0f64).prop_map(RevealOp::Scroll),
            (0.0..=1.0f64).prop_map(RevealOp::Observe),
        ],
        1..60,
    )
}

fn tracker_for(layout: &[Section]) -> ScrollStateTracker {
    let manifest = PageManifest {
        sections: layout.iter().map(|s| s.id.clone()).collect(),
        nav_links: layout.iter().map(|s| s.id.anchor()).collect(),
        reveal_targets: vec![ElementKey::new("card")],
        counters: Vec::new(),
    };
    let handles: HashMap<ElementKey, ()> = manifest
        .required_elements()
        .into_iter()
        .map(|(_, key)| (key, ()))
        .collect();
    ScrollStateTracker::init(TrackerConfig::default(), &manifest, &handles).unwrap()
}

fn active_count(tracker: &ScrollStateTracker, layout: &[Section]) -> usize {
    layout
        .iter()
        .filter(|s| tracker.is_link_active(&s.id.anchor()))
        .count()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Never more than one active link; exactly one once a section matched
    #[test]
    fn at_most_one_active_link(
        layout in layout_strategy(),
        scrolls in prop::collection::vec(0.0..20000.0f64, 1..40)
    ) {
        let mut tracker = tracker_for(&layout);
        let mut matched_once = false;

        for scroll_y in scrolls {
            tracker.dispatch(PageEvent::Scrolled { scroll_y, layout: layout.clone() });
            let position = scroll_y + 200.0;
            if layout.iter().any(|s| s.contains(position)) {
                matched_once = true;
            }

            let count = active_count(&tracker, &layout);
            if matched_once {
                prop_assert_eq!(count, 1);
            } else {
                prop_assert_eq!(count, 0);
            }
        }
    }

    /// The active link is the section containing the biased position
    #[test]
    fn active_link_matches_containing_section(
        layout in layout_strategy(),
        scroll_y in 0.0..20000.0f64
    ) {
        let mut tracker = tracker_for(&layout);
        tracker.dispatch(PageEvent::Scrolled { scroll_y, layout: layout.clone() });

        let expected: Option<SectionId> = layout
            .iter()
            .find(|s| s.contains(scroll_y + 200.0))
            .map(|s| s.id.clone());
        prop_assert_eq!(tracker.active_section().cloned(), expected);
    }

    /// revealed(t1) implies revealed(t2) for every later t2
    #[test]
    fn reveal_is_monotonic(layout in layout_strategy(), ops in reveal_ops_strategy()) {
        let mut tracker = tracker_for(&layout);
        let key = ElementKey::new("card");
        let mut revealed = false;

        for op in ops {
            match op {
                RevealOp::Scroll(scroll_y) => {
                    tracker.dispatch(PageEvent::Scrolled { scroll_y, layout: layout.clone() });
                }
                RevealOp::Observe(ratio) => {
                    tracker.dispatch(PageEvent::Intersection { key: key.clone(), ratio });
                }
            }
            let now = tracker.reveal_state(&key) == Some(RevealState::Revealed);
            prop_assert!(!revealed || now, "element was hidden again");
            revealed = now;
        }
    }

    /// Counter values never decrease, never exceed the target, and end on it
    #[test]
    fn counter_ramp_is_monotonic_and_exact(
        target in 0u64..1_000_000,
        ticks in prop::collection::vec(0u64..50, 1..400)
    ) {
        let mut counter = CounterStepper::new(target, 200, Duration::from_millis(1));
        counter.start();

        let mut last = 0;
        for ms in ticks {
            let value = counter.advance(Duration::from_millis(ms)).value();
            prop_assert!(value >= last);
            prop_assert!(value <= target);
            last = value;
        }

        // drain whatever is left
        let outcome = counter.advance(Duration::from_millis(1000));
        prop_assert!(outcome.is_done());
        prop_assert_eq!(outcome.value(), target);
        prop_assert_eq!(counter.display(), format!("{}+", target));
    }

    /// Any positive target settles within ~steps ticks of one interval
    #[test]
    fn counter_settles_within_step_budget(target in 1u64..10_000_000) {
        let mut counter = CounterStepper::new(target, 200, Duration::from_millis(1));
        counter.start();

        let mut ticks = 0;
        while !counter.advance(Duration::from_millis(1)).is_done() {
            ticks += 1;
            prop_assert!(ticks <= 200);
        }
    }
}
