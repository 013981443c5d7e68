//! The scroll reel: loader, viewport, scroll progress, interpolator and renderer in one loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use crate::animation::interpolator::IndexInterpolator;
use crate::assets::loader::{AssetLoader, LoadCounts};
use crate::assets::source::FrameSource;
use crate::config::ReelConfig;
use crate::foundation::core::CanvasSurface;
use crate::foundation::error::ReelResult;
use crate::foundation::math::floor_index;
use crate::foundation::observe::SubscriptionId;
use crate::host::{ScrollHost, ViewportHost};
use crate::render::renderer::{FrameRenderer, RenderOutcome};
use crate::render::surface::DrawSurface;
use crate::scroll::{ProgressChange, ScrollProgressSource};
use crate::viewport::ViewportTracker;

#[derive(Clone, Copy, Debug)]
enum ReelEvent {
    Progress(ProgressChange),
    Resized(CanvasSurface),
}

/// What one [`ScrollReel::tick`] did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Fractional index rendered this tick, if any.
    pub index: Option<f64>,
    /// Renderer result for `index`.
    pub outcome: Option<RenderOutcome>,
    /// Frames whose load status changed since the previous tick.
    pub loaded: Vec<usize>,
}

/// Scroll-driven frame sequence player.
///
/// All host callbacks ([`ScrollReel::handle_scroll`], [`ScrollReel::handle_resize`],
/// [`ScrollReel::tick`]) must come from the thread that owns the reel. Asset fetches run on a
/// background pool and are applied during `tick`.
pub struct ScrollReel<S: DrawSurface> {
    loader: AssetLoader,
    viewport: ViewportTracker,
    scroll: ScrollProgressSource,
    interp: IndexInterpolator,
    renderer: FrameRenderer<S>,

    inbox: Rc<RefCell<Vec<ReelEvent>>>,
    viewport_sub: Option<SubscriptionId>,
    scroll_sub: Option<SubscriptionId>,

    needs_redraw: bool,
    last_outcome: Option<RenderOutcome>,
    initialized: bool,
    disposed: bool,
}

impl<S: DrawSurface> std::fmt::Debug for ScrollReel<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollReel")
            .field("loader", &self.loader)
            .field("viewport", &self.viewport)
            .field("scroll", &self.scroll)
            .field("interp", &self.interp)
            .field("needs_redraw", &self.needs_redraw)
            .field("last_outcome", &self.last_outcome)
            .field("initialized", &self.initialized)
            .field("disposed", &self.disposed)
            .finish()
    }
}

impl<S: DrawSurface> ScrollReel<S> {
    /// Build a reel from validated configuration. Nothing is fetched until [`ScrollReel::init`].
    pub fn new(
        cfg: &ReelConfig,
        source: Arc<dyn FrameSource>,
        viewport_host: Rc<dyn ViewportHost>,
        scroll_host: Rc<dyn ScrollHost>,
        surface: S,
    ) -> ReelResult<Self> {
        cfg.validate()?;
        let loader = AssetLoader::new(&cfg.frames, source, &cfg.loader)?;
        let interp = IndexInterpolator::new(loader.sequence().len(), &cfg.tween);
        Ok(Self {
            loader,
            viewport: ViewportTracker::new(viewport_host),
            scroll: ScrollProgressSource::new(scroll_host),
            interp,
            renderer: FrameRenderer::new(surface),
            inbox: Rc::new(RefCell::new(Vec::new())),
            viewport_sub: None,
            scroll_sub: None,
            needs_redraw: false,
            last_outcome: None,
            initialized: false,
            disposed: false,
        })
    }

    /// Start preloading, size the surface, subscribe to the hosts, and schedule the first draw
    /// at the current scroll position. Calling again is a no-op.
    #[tracing::instrument(skip(self))]
    pub fn init(&mut self) -> ReelResult<()> {
        if self.initialized || self.disposed {
            return Ok(());
        }
        self.loader.init()?;

        let inbox = Rc::clone(&self.inbox);
        self.viewport_sub = Some(
            self.viewport
                .subscribe(move |s| inbox.borrow_mut().push(ReelEvent::Resized(*s))),
        );
        let inbox = Rc::clone(&self.inbox);
        self.scroll_sub = Some(
            self.scroll
                .subscribe(move |c| inbox.borrow_mut().push(ReelEvent::Progress(*c))),
        );

        self.viewport.init();
        let progress = self.scroll.init();
        let index = self.interp.snap(progress);
        self.apply_events(Duration::ZERO);
        self.needs_redraw = true;
        self.initialized = true;
        tracing::debug!(
            frames = self.loader.sequence().len(),
            progress,
            index,
            "scroll reel initialized"
        );
        Ok(())
    }

    /// Host scroll notification at time `now`. Returns the progress change, if any.
    pub fn handle_scroll(&mut self, now: Duration) -> Option<ProgressChange> {
        if self.disposed {
            return None;
        }
        let change = self.scroll.on_scroll();
        self.apply_events(now);
        change
    }

    /// Host resize notification at time `now`. Returns `true` when the size changed.
    pub fn handle_resize(&mut self, now: Duration) -> bool {
        if self.disposed {
            return false;
        }
        let changed = self.viewport.on_resize();
        self.apply_events(now);
        changed
    }

    /// One host frame: apply finished fetches, advance the tween, and draw.
    ///
    /// When no tween is running, the last rendered index is redrawn only if the surface was
    /// resized or its frame just finished loading after a skipped draw.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, now: Duration) -> TickReport {
        if self.disposed {
            return TickReport::default();
        }
        let loaded = self.loader.poll();
        if !loaded.is_empty()
            && !self.last_outcome.is_some_and(|o| o.is_drawn())
            && floor_index(self.interp.last_rendered()).is_some_and(|i| loaded.contains(&i))
        {
            self.needs_redraw = true;
        }

        let index = match self.interp.tick(now) {
            Some(i) => Some(i),
            None if self.needs_redraw => Some(self.interp.last_rendered()),
            None => None,
        };
        let outcome = index.map(|i| self.renderer.render(i, self.loader.sequence()));
        if outcome.is_some() {
            self.needs_redraw = false;
            self.last_outcome = outcome;
        }
        TickReport {
            index,
            outcome,
            loaded,
        }
    }

    /// Block until every frame has loaded or failed. Returns the frames that changed status.
    pub fn wait_for_assets(&mut self) -> Vec<usize> {
        let changed = self.loader.wait_all();
        if floor_index(self.interp.last_rendered()).is_some_and(|i| changed.contains(&i)) {
            self.needs_redraw = true;
        }
        changed
    }

    /// The preloader.
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }

    /// Count of frames per load status.
    pub fn counts(&self) -> LoadCounts {
        self.loader.counts()
    }

    /// The interpolator.
    pub fn interpolator(&self) -> &IndexInterpolator {
        &self.interp
    }

    /// Current scroll progress.
    pub fn progress(&self) -> f64 {
        self.scroll.progress()
    }

    /// Current surface size.
    pub fn surface_size(&self) -> CanvasSurface {
        self.viewport.surface()
    }

    /// Outcome of the most recent draw attempt.
    pub fn last_outcome(&self) -> Option<RenderOutcome> {
        self.last_outcome
    }

    /// The renderer and its surface.
    pub fn renderer(&self) -> &FrameRenderer<S> {
        &self.renderer
    }

    /// The renderer and its surface, mutably.
    pub fn renderer_mut(&mut self) -> &mut FrameRenderer<S> {
        &mut self.renderer
    }

    /// Return `true` after [`ScrollReel::dispose`].
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release both host subscriptions and abandon outstanding fetches. Further host callbacks
    /// are ignored.
    #[tracing::instrument(skip(self))]
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(id) = self.viewport_sub.take() {
            self.viewport.unsubscribe(id);
        }
        if let Some(id) = self.scroll_sub.take() {
            self.scroll.unsubscribe(id);
        }
        self.viewport.dispose();
        self.scroll.dispose();
        self.loader.dispose();
        self.inbox.borrow_mut().clear();
        self.disposed = true;
    }

    fn apply_events(&mut self, now: Duration) {
        let events = std::mem::take(&mut *self.inbox.borrow_mut());
        for ev in events {
            match ev {
                ReelEvent::Progress(change) => {
                    self.interp.retarget(change.latest, now);
                }
                ReelEvent::Resized(size) => {
                    if let Err(err) = self.renderer.resize(size) {
                        tracing::warn!(
                            width = size.width_px,
                            height = size.height_px,
                            error = %err,
                            "surface resize failed"
                        );
                    }
                    self.needs_redraw = true;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
