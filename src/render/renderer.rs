//! Selects the frame for a fractional index and draws it.

use crate::assets::loader::{AssetStatus, FrameSequence};
use crate::foundation::core::CanvasSurface;
use crate::foundation::error::ReelResult;
use crate::foundation::math::floor_index;
use crate::render::geometry::{CoverFit, cover_fit};
use crate::render::surface::DrawSurface;

/// Why a render request drew nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// `floor(index)` is negative, non-finite, or past the end of the sequence.
    OutOfRange,
    /// The frame is still loading.
    Pending,
    /// The frame failed to load.
    Failed,
    /// The surface has no pixels.
    EmptySurface,
    /// The surface rejected the draw.
    DrawFailed,
}

/// Result of one render request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOutcome {
    /// The frame at `index` was drawn at `fit`.
    Drawn {
        /// Integer frame index that was drawn.
        index: usize,
        /// Placement used for the draw.
        fit: CoverFit,
    },
    /// Nothing was drawn; the surface is left as it was.
    Skipped(SkipReason),
}

impl RenderOutcome {
    /// Return `true` when a frame was drawn.
    pub fn is_drawn(&self) -> bool {
        matches!(self, Self::Drawn { .. })
    }
}

/// Draws the frame selected by a fractional index, cover-fitted to the surface.
///
/// Holds no state besides the surface it exclusively owns.
#[derive(Debug)]
pub struct FrameRenderer<S: DrawSurface> {
    surface: S,
}

impl<S: DrawSurface> FrameRenderer<S> {
    /// Wrap `surface`.
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Resize the owned surface.
    pub fn resize(&mut self, size: CanvasSurface) -> ReelResult<()> {
        self.surface.resize(size)
    }

    /// Owned surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Owned surface, mutably (e.g. to read back pixels).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Draw frame `floor(index)` of `frames` if it is ready; otherwise leave the surface alone.
    pub fn render(&mut self, index: f64, frames: &FrameSequence) -> RenderOutcome {
        let Some(i) = floor_index(index) else {
            return skipped(index, None, SkipReason::OutOfRange);
        };
        let Some(asset) = frames.get(i) else {
            return skipped(index, Some(i), SkipReason::OutOfRange);
        };
        let image = match (asset.status(), asset.image()) {
            (AssetStatus::Ready, Some(image)) => image,
            (AssetStatus::Failed, _) => return skipped(index, Some(i), SkipReason::Failed),
            _ => return skipped(index, Some(i), SkipReason::Pending),
        };
        let Some(fit) = cover_fit(image.width, image.height, self.surface.size()) else {
            return skipped(index, Some(i), SkipReason::EmptySurface);
        };

        let drawn = self
            .surface
            .clear()
            .and_then(|()| self.surface.draw_image(image, fit.rect()));
        if let Err(err) = drawn {
            tracing::warn!(index = i, error = %err, "frame draw failed");
            return RenderOutcome::Skipped(SkipReason::DrawFailed);
        }
        RenderOutcome::Drawn { index: i, fit }
    }
}

fn skipped(index: f64, frame: Option<usize>, reason: SkipReason) -> RenderOutcome {
    tracing::debug!(index, frame, ?reason, "render skipped");
    RenderOutcome::Skipped(reason)
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
