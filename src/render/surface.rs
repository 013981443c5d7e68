//! Drawing surfaces: the CPU rasterizer and a call recorder.

use std::collections::VecDeque;
use std::sync::Arc;

use kurbo::{Affine, Rect};

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{CanvasSurface, Rgba8Premul};
use crate::foundation::error::{ReelError, ReelResult};

/// The only write interface of the pipeline: resize, clear, and draw an image into a rectangle.
///
/// The destination rectangle may extend past the surface; whatever overflows is cropped.
pub trait DrawSurface {
    /// Reallocate the backing buffer for `surface`. Contents are discarded.
    fn resize(&mut self, surface: CanvasSurface) -> ReelResult<()>;

    /// Current backing buffer size.
    fn size(&self) -> CanvasSurface;

    /// Erase the whole surface.
    fn clear(&mut self) -> ReelResult<()>;

    /// Draw `image` scaled into `dest` (canvas pixels).
    fn draw_image(&mut self, image: &PreparedImage, dest: Rect) -> ReelResult<()>;
}

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// One recorded surface operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// Backing buffer reallocated.
    Resize(CanvasSurface),
    /// Surface erased.
    Clear,
    /// Image drawn into `dest`.
    Image {
        /// Source width in pixels.
        width: u32,
        /// Source height in pixels.
        height: u32,
        /// Destination rectangle.
        dest: Rect,
    },
}

/// Surface that records calls instead of drawing; for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: CanvasSurface,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Create an empty, zero-sized recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take and reset the recorded calls.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Destination rectangles of every recorded image draw.
    pub fn image_draws(&self) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Image { dest, .. } => Some(*dest),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, surface: CanvasSurface) -> ReelResult<()> {
        self.size = surface;
        self.calls.push(DrawCall::Resize(surface));
        Ok(())
    }

    fn size(&self) -> CanvasSurface {
        self.size
    }

    fn clear(&mut self) -> ReelResult<()> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn draw_image(&mut self, image: &PreparedImage, dest: Rect) -> ReelResult<()> {
        self.calls.push(DrawCall::Image {
            width: image.width,
            height: image.height,
            dest,
        });
        Ok(())
    }
}

/// Converted image paints kept by [`CpuSurface`]. Scrubbing back and forth reuses a handful of
/// neighbouring frames; older paints are dropped.
pub const PAINT_CACHE_CAPACITY: usize = 4;

/// CPU raster surface backed by `vello_cpu`.
///
/// Operations accumulate in a render context and are rasterized into the target pixmap on
/// [`CpuSurface::frame`].
pub struct CpuSurface {
    size: CanvasSurface,
    clear_rgba: Option<[u8; 4]>,
    ctx: Option<vello_cpu::RenderContext>,
    target: Option<vello_cpu::Pixmap>,
    // Most recently used first, matched by pixel buffer identity.
    paints: VecDeque<(Arc<Vec<u8>>, vello_cpu::Image)>,
    dirty: bool,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("size", &self.size)
            .field("clear_rgba", &self.clear_rgba)
            .field("cached_paints", &self.paints.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl CpuSurface {
    /// Create a zero-sized surface. `clear_rgba` (straight alpha) is painted on every clear.
    pub fn new(clear_rgba: Option<[u8; 4]>) -> Self {
        Self {
            size: CanvasSurface::default(),
            clear_rgba,
            ctx: None,
            target: None,
            paints: VecDeque::with_capacity(PAINT_CACHE_CAPACITY),
            dirty: false,
        }
    }

    /// Rasterize pending operations and read the surface back.
    pub fn frame(&mut self) -> ReelResult<FrameRGBA> {
        let Some(target) = self.target.as_mut() else {
            return Ok(FrameRGBA {
                width: self.size.width_px,
                height: self.size.height_px,
                data: Vec::new(),
                premultiplied: true,
            });
        };
        if self.dirty
            && let Some(ctx) = self.ctx.as_mut()
        {
            let bg = self
                .clear_rgba
                .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
                .unwrap_or_else(Rgba8Premul::transparent);
            clear_pixmap(target, bg.to_array());
            ctx.flush();
            ctx.render_to_pixmap(target);
            self.dirty = false;
        }
        Ok(FrameRGBA {
            width: self.size.width_px,
            height: self.size.height_px,
            data: target.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    /// Number of converted image paints currently held.
    pub fn cached_paints(&self) -> usize {
        self.paints.len()
    }

    fn paint_for(&mut self, image: &PreparedImage) -> ReelResult<vello_cpu::Image> {
        if let Some(pos) = self
            .paints
            .iter()
            .position(|(bytes, _)| Arc::ptr_eq(bytes, &image.rgba8_premul))
            && let Some(hit) = self.paints.remove(pos)
        {
            let paint = hit.1.clone();
            self.paints.push_front(hit);
            return Ok(paint);
        }
        let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.paints.truncate(PAINT_CACHE_CAPACITY - 1);
        self.paints
            .push_front((Arc::clone(&image.rgba8_premul), paint.clone()));
        Ok(paint)
    }
}

impl DrawSurface for CpuSurface {
    fn resize(&mut self, surface: CanvasSurface) -> ReelResult<()> {
        self.dirty = false;
        self.paints.clear();
        if surface.is_empty() {
            self.size = surface;
            self.ctx = None;
            self.target = None;
            return Ok(());
        }
        let (w, h) = surface.to_u16()?;
        self.size = surface;
        self.ctx = Some(vello_cpu::RenderContext::new(w, h));
        self.target = Some(vello_cpu::Pixmap::new(w, h));
        Ok(())
    }

    fn size(&self) -> CanvasSurface {
        self.size
    }

    fn clear(&mut self) -> ReelResult<()> {
        if self.target.is_none() {
            return Ok(());
        }
        let (w, h) = self.size.to_u16()?;
        let ctx = self.ctx.insert(vello_cpu::RenderContext::new(w, h));
        if let Some([r, g, b, a]) = self.clear_rgba
            && a > 0
        {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.size.width_px),
                f64::from(self.size.height_px),
            ));
        }
        self.dirty = true;
        Ok(())
    }

    fn draw_image(&mut self, image: &PreparedImage, dest: Rect) -> ReelResult<()> {
        if self.ctx.is_none() {
            return Ok(());
        }
        let paint = self.paint_for(image)?;
        let (iw, ih) = (f64::from(image.width), f64::from(image.height));
        let tr = Affine::translate((dest.x0, dest.y0))
            * Affine::scale_non_uniform(dest.width() / iw, dest.height() / ih);

        let Some(ctx) = self.ctx.as_mut() else {
            return Ok(());
        };
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(affine_to_cpu(tr));
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));
        self.dirty = true;
        Ok(())
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> ReelResult<vello_cpu::Pixmap> {
    let (w, h) = CanvasSurface::new(width, height).to_u16()?;
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4);
    if bytes.len() != expected {
        return Err(ReelError::render("pixmap byte len mismatch"));
    }
    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(expected / 4);
    for px in bytes.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        });
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
