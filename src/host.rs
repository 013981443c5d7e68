//! Host-side abstractions: the viewport and the scroll container.
//!
//! Components receive these as injected trait objects instead of reaching for a global window, so
//! the pipeline runs headless under [`SimulatedHost`].

use std::cell::Cell;

use crate::foundation::core::CanvasSurface;

/// Reports the visible viewport size.
pub trait ViewportHost {
    /// Current viewport size in device pixels.
    fn viewport_size(&self) -> CanvasSurface;
}

/// Reports the scroll position and the tracked region's bounds, in one shared offset space.
pub trait ScrollHost {
    /// Current scroll offset of the viewport top.
    fn scroll_offset(&self) -> f64;
    /// Bounds of the region whose scroll-through drives playback.
    fn tracked_region(&self) -> ScrollRegion;
}

/// Vertical extent of the tracked region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    /// Offset of the region's top edge.
    pub top: f64,
    /// Region height.
    pub height: f64,
}

impl ScrollRegion {
    /// Scroll offset at which the region top meets the viewport top (progress 0).
    pub fn start_offset(self) -> f64 {
        self.top
    }

    /// Scroll offset at which the region bottom meets the viewport top (progress 1).
    pub fn end_offset(self) -> f64 {
        self.top + self.height
    }
}

/// In-process host with settable viewport and scroll state.
#[derive(Debug)]
pub struct SimulatedHost {
    viewport: Cell<CanvasSurface>,
    scroll_offset: Cell<f64>,
    region: Cell<ScrollRegion>,
}

impl SimulatedHost {
    /// Create a host scrolled to the top of the page.
    pub fn new(viewport: CanvasSurface, region: ScrollRegion) -> Self {
        Self {
            viewport: Cell::new(viewport),
            scroll_offset: Cell::new(0.0),
            region: Cell::new(region),
        }
    }

    /// A page whose tracked region starts at the top and spans `screens` viewport heights.
    pub fn with_screens(viewport: CanvasSurface, screens: f64) -> Self {
        let height = f64::from(viewport.height_px) * screens;
        Self::new(viewport, ScrollRegion { top: 0.0, height })
    }

    /// Resize the viewport.
    pub fn set_viewport(&self, viewport: CanvasSurface) {
        self.viewport.set(viewport);
    }

    /// Move the scroll position.
    pub fn set_scroll_offset(&self, offset: f64) {
        self.scroll_offset.set(offset);
    }

    /// Move the scroll position to the offset matching progress `p` in the tracked region.
    pub fn scroll_to_progress(&self, p: f64) {
        let r = self.region.get();
        let start = r.start_offset();
        self.scroll_offset.set(start + p * (r.end_offset() - start));
    }

    /// Replace the tracked region.
    pub fn set_region(&self, region: ScrollRegion) {
        self.region.set(region);
    }
}

impl ViewportHost for SimulatedHost {
    fn viewport_size(&self) -> CanvasSurface {
        self.viewport.get()
    }
}

impl ScrollHost for SimulatedHost {
    fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    fn tracked_region(&self) -> ScrollRegion {
        self.region.get()
    }
}
