//! Bridge between the mounted page and the scroll-state tracker.
//!
//! Measures registered elements, turns the measurements into
//! [`PageEvent`]s, and runs the tick loop that drives counter ramps.
//! Measurement runs after tracker install and on every scroll or resize of
//! the scroll root, one run at a time.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use folio_core::{
    Coalescer, ElementKey, ElementRect, FolioResult, PageEvent, PageManifest, ScrollStateTracker,
    Section, SectionId, Ticker, TrackerConfig, Viewport,
};
use futures::future::join_all;

use crate::context::{ElementRegistry, SharedTracker};

/// DOM id of the scrolling container.
pub const SCROLL_ROOT_ID: &str = "scroll-root";

/// How long to wait for declared elements to mount before reporting them missing.
pub const MOUNT_GRACE: Duration = Duration::from_millis(750);

/// Build the tracker from whatever is registered right now.
pub fn try_init(
    config: &TrackerConfig,
    manifest: &PageManifest,
    registry: &ElementRegistry,
) -> FolioResult<ScrollStateTracker> {
    ScrollStateTracker::init(config.clone(), manifest, registry)
}

/// Re-measure the page unless a measurement is already running.
///
/// Requests that arrive mid-run collapse into one trailing run, so a burst
/// of scroll or resize events costs at most two measurements.
pub fn request_sync(
    registry: Signal<ElementRegistry>,
    tracker: Signal<SharedTracker>,
    mut gate: Signal<Coalescer>,
    ticker: Signal<Option<Task>>,
) {
    if !gate.write().request() {
        return;
    }
    spawn(async move {
        loop {
            sync_with_layout(registry, tracker).await;
            ensure_ticker(tracker, ticker);
            if !gate.write().finish() {
                break;
            }
        }
    });
}

/// Measure the page and feed scroll and intersection events to the tracker.
async fn sync_with_layout(registry: Signal<ElementRegistry>, mut tracker: Signal<SharedTracker>) {
    let Some((sections, pending)) = tracker
        .read()
        .as_ref()
        .map(|t| (t.sections().to_vec(), t.pending_observations()))
    else {
        return;
    };

    // clone the handles out so no borrow is held across an await
    let (root, section_handles, pending_handles) = {
        let handles = registry.read();
        let root = handles.get(&ElementKey::scroll_root()).cloned();
        let sections: Vec<_> = sections
            .into_iter()
            .filter_map(|id| handles.get(&id.element_key()).cloned().map(|h| (id, h)))
            .collect();
        let pending: Vec<_> = pending
            .into_iter()
            .filter_map(|key| handles.get(&key).cloned().map(|h| (key, h)))
            .collect();
        (root, sections, pending)
    };
    let Some(root) = root else {
        return;
    };

    let (offset, root_rect, section_rects, pending_rects) = futures::join!(
        root.get_scroll_offset(),
        root.get_client_rect(),
        join_all(section_handles.iter().map(|(_, h)| h.get_client_rect())),
        join_all(pending_handles.iter().map(|(_, h)| h.get_client_rect())),
    );
    let (Ok(offset), Ok(root_rect)) = (offset, root_rect) else {
        tracing::debug!("Scroll root is not measurable yet");
        return;
    };
    let scroll_y = offset.y;
    let root_top = root_rect.origin.y;
    let viewport = Viewport::new(root_rect.size.height);

    let layout: Vec<Section> = section_handles
        .into_iter()
        .zip(section_rects)
        .filter_map(|((id, _), rect)| {
            let rect = rect.ok()?;
            Some(Section {
                id,
                top: rect.origin.y - root_top + scroll_y,
                height: rect.size.height,
            })
        })
        .collect();

    let mut slot = tracker.write();
    let Some(tracker) = slot.as_mut() else {
        return;
    };
    tracker.dispatch(PageEvent::Scrolled { scroll_y, layout });
    for ((key, _), rect) in pending_handles.into_iter().zip(pending_rects) {
        let Ok(rect) = rect else {
            continue;
        };
        let rect = ElementRect::new(rect.origin.y - root_top, rect.size.height);
        if let Some(ratio) = tracker.visible_fraction(&key, rect, viewport) {
            tracker.dispatch(PageEvent::Intersection { key, ratio });
        }
    }
}

/// Start the tick loop if a counter is animating and no loop is running.
///
/// The loop exits on its own once every counter has settled.
fn ensure_ticker(mut tracker: Signal<SharedTracker>, mut running: Signal<Option<Task>>) {
    let interval = match tracker.read().as_ref() {
        Some(t) if t.needs_ticks() => t.config().counter_step_interval(),
        _ => return,
    };
    if running.read().is_some() {
        return;
    }

    let task = spawn(async move {
        let mut clock = Ticker::new();
        clock.tick(Instant::now());
        loop {
            tokio::time::sleep(interval).await;
            let elapsed = clock.tick(Instant::now());
            let more = match tracker.write().as_mut() {
                Some(t) => t.dispatch(PageEvent::Tick { elapsed }).needs_ticks(),
                None => false,
            };
            if !more {
                break;
            }
        }
        tracing::debug!("Counter tick loop finished");
        running.set(None);
    });
    running.set(Some(task));
}

/// Smooth-scroll the page so `id` sits `offset` px below the top.
pub async fn scroll_to_section(registry: Signal<ElementRegistry>, id: SectionId, offset: f64) {
    let (root, section) = {
        let handles = registry.read();
        (
            handles.get(&ElementKey::scroll_root()).cloned(),
            handles.get(&id.element_key()).cloned(),
        )
    };
    let (Some(root), Some(section)) = (root, section) else {
        tracing::debug!(%id, "Anchor target is not on the page");
        return;
    };

    let (Ok(scroll), Ok(root_rect), Ok(rect)) = (
        root.get_scroll_offset().await,
        root.get_client_rect().await,
        section.get_client_rect().await,
    ) else {
        return;
    };
    let section_top = rect.origin.y - root_rect.origin.y + scroll.y;
    let top = folio_core::anchor::scroll_target(section_top, offset);

    let js = format!(
        "document.getElementById('{}').scrollTo({{ top: {}, behavior: 'smooth' }});",
        SCROLL_ROOT_ID, top
    );
    if let Err(e) = dioxus::document::eval(&js).await {
        tracing::debug!(%id, "Smooth scroll script failed: {:?}", e);
    }
}
