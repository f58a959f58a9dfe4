//! Single-flight gate for work requested faster than it completes.
//!
//! Layout measurement is requested on every scroll and resize event but
//! takes several webview round trips. The gate lets one run proceed at a
//! time and folds every request that arrives meanwhile into one trailing run.

/// Run/rerun bookkeeping for one kind of background work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coalescer {
    in_flight: bool,
    dirty: bool,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a run. Returns `true` when the caller should start one;
    /// otherwise the request is remembered for the trailing run.
    pub fn request(&mut self) -> bool {
        if self.in_flight {
            self.dirty = true;
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Mark the current run finished. Returns `true` when requests arrived
    /// during it and the caller should run once more.
    pub fn finish(&mut self) -> bool {
        if self.dirty {
            self.dirty = false;
            true
        } else {
            self.in_flight = false;
            false
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
