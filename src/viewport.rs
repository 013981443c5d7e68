//! Keeps the drawing surface size in step with the host viewport.

use std::rc::Rc;

use crate::foundation::core::CanvasSurface;
use crate::foundation::observe::{SubscriptionId, Subscribers};
use crate::host::ViewportHost;

/// Tracks the host viewport and notifies subscribers when the drawable size changes.
pub struct ViewportTracker {
    host: Rc<dyn ViewportHost>,
    surface: Option<CanvasSurface>,
    subscribers: Subscribers<CanvasSurface>,
    disposed: bool,
}

impl std::fmt::Debug for ViewportTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportTracker")
            .field("surface", &self.surface)
            .field("subscribers", &self.subscribers)
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl ViewportTracker {
    /// Create a tracker reading sizes from `host`.
    pub fn new(host: Rc<dyn ViewportHost>) -> Self {
        Self {
            host,
            surface: None,
            subscribers: Subscribers::default(),
            disposed: false,
        }
    }

    /// Read the initial size and notify subscribers unconditionally.
    pub fn init(&mut self) -> CanvasSurface {
        let surface = self.host.viewport_size();
        self.surface = Some(surface);
        if !self.disposed {
            tracing::debug!(
                width = surface.width_px,
                height = surface.height_px,
                "viewport initialized"
            );
            self.subscribers.emit(&surface);
        }
        surface
    }

    /// Handle a host resize notification. Returns `true` when the size changed.
    ///
    /// An unchanged size notifies nobody.
    pub fn on_resize(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        let surface = self.host.viewport_size();
        if self.surface == Some(surface) {
            return false;
        }
        self.surface = Some(surface);
        tracing::debug!(
            width = surface.width_px,
            height = surface.height_px,
            "viewport resized"
        );
        self.subscribers.emit(&surface);
        true
    }

    /// Last observed size; zero-sized before [`ViewportTracker::init`].
    pub fn surface(&self) -> CanvasSurface {
        self.surface.unwrap_or_default()
    }

    /// Register a size-change callback.
    pub fn subscribe(&mut self, f: impl FnMut(&CanvasSurface) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(f)
    }

    /// Deregister a callback. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Drop every subscription and ignore further resize notifications.
    pub fn dispose(&mut self) {
        self.subscribers.clear();
        self.disposed = true;
    }
}

#[cfg(test)]
#[path = "../tests/unit/viewport.rs"]
mod tests;
