//! Normalized scroll progress through the tracked region.

use std::rc::Rc;

use crate::foundation::math::clamp_unit;
use crate::foundation::observe::{SubscriptionId, Subscribers};
use crate::host::{ScrollHost, ScrollRegion};

/// A progress update together with the value it replaced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressChange {
    /// New progress in `[0, 1]`.
    pub latest: f64,
    /// Progress before this change.
    pub previous: f64,
}

/// Progress of `scroll_offset` through `region`:
/// `clamp((offset - start) / (end - start), 0, 1)`.
///
/// A region with no positive height behaves as a step at its top edge.
pub fn compute_progress(scroll_offset: f64, region: ScrollRegion) -> f64 {
    let start = region.start_offset();
    let span = region.end_offset() - start;
    if !(span > 0.0 && span.is_finite()) {
        return if scroll_offset >= start { 1.0 } else { 0.0 };
    }
    clamp_unit((scroll_offset - start) / span)
}

/// Converts host scroll positions into progress notifications.
///
/// Raw values pass through unsmoothed. Subscribers are notified only when the clamped progress
/// actually moves, so scrolling past either end of the region stays quiet.
pub struct ScrollProgressSource {
    host: Rc<dyn ScrollHost>,
    latest: f64,
    subscribers: Subscribers<ProgressChange>,
    disposed: bool,
}

impl std::fmt::Debug for ScrollProgressSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollProgressSource")
            .field("latest", &self.latest)
            .field("subscribers", &self.subscribers)
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl ScrollProgressSource {
    /// Create a source reading positions from `host`.
    pub fn new(host: Rc<dyn ScrollHost>) -> Self {
        Self {
            host,
            latest: 0.0,
            subscribers: Subscribers::default(),
            disposed: false,
        }
    }

    /// Read the starting progress without notifying anyone.
    pub fn init(&mut self) -> f64 {
        self.latest = compute_progress(self.host.scroll_offset(), self.host.tracked_region());
        self.latest
    }

    /// Handle a host scroll tick. Returns the change that was broadcast, if any.
    pub fn on_scroll(&mut self) -> Option<ProgressChange> {
        if self.disposed {
            return None;
        }
        let latest = compute_progress(self.host.scroll_offset(), self.host.tracked_region());
        if latest == self.latest {
            return None;
        }
        let change = ProgressChange {
            latest,
            previous: self.latest,
        };
        self.latest = latest;
        self.subscribers.emit(&change);
        Some(change)
    }

    /// Most recent progress.
    pub fn progress(&self) -> f64 {
        self.latest
    }

    /// Register a progress-change callback.
    pub fn subscribe(&mut self, f: impl FnMut(&ProgressChange) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(f)
    }

    /// Deregister a callback. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Drop every subscription and ignore further scroll ticks.
    pub fn dispose(&mut self) {
        self.subscribers.clear();
        self.disposed = true;
    }
}

#[cfg(test)]
#[path = "../tests/unit/scroll.rs"]
mod tests;
