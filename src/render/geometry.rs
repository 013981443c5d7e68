//! Cover ("fill-crop") placement of a frame on the canvas.

use kurbo::Rect;

use crate::foundation::core::CanvasSurface;

/// Placement of an image scaled to cover the whole canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    /// Left edge relative to the canvas; `<= 0` when cropping horizontally.
    pub x_offset: f64,
    /// Top edge relative to the canvas; `<= 0` when cropping vertically.
    pub y_offset: f64,
    /// Scaled image width, `>=` canvas width.
    pub draw_width: f64,
    /// Scaled image height, `>=` canvas height.
    pub draw_height: f64,
}

impl CoverFit {
    /// Destination rectangle in canvas space.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x_offset,
            self.y_offset,
            self.x_offset + self.draw_width,
            self.y_offset + self.draw_height,
        )
    }

    /// Return `true` when part of the image falls outside the canvas.
    pub fn crops(&self) -> bool {
        self.x_offset < 0.0 || self.y_offset < 0.0
    }
}

/// Fill-crop ("cover") placement of an `image_w × image_h` image on `canvas`.
///
/// An image relatively wider than the canvas is matched on height and cropped left/right;
/// otherwise it is matched on width and cropped top/bottom. The result is centered. Returns `None`
/// when either side is empty.
pub fn cover_fit(image_w: u32, image_h: u32, canvas: CanvasSurface) -> Option<CoverFit> {
    if image_w == 0 || image_h == 0 || canvas.is_empty() {
        return None;
    }
    let (iw, ih) = (f64::from(image_w), f64::from(image_h));
    let (cw, ch) = (f64::from(canvas.width_px), f64::from(canvas.height_px));

    // image_aspect > canvas_aspect, compared exactly on integers.
    let wider = u64::from(image_w) * u64::from(canvas.height_px)
        > u64::from(canvas.width_px) * u64::from(image_h);
    let (draw_width, draw_height) = if wider {
        (ch * iw / ih, ch)
    } else {
        (cw, cw * ih / iw)
    };

    Some(CoverFit {
        x_offset: (cw - draw_width) / 2.0,
        y_offset: (ch - draw_height) / 2.0,
        draw_width,
        draw_height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
