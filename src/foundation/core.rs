use crate::foundation::error::{ReelError, ReelResult};

/// Drawable surface dimensions in device pixels.
///
/// Written by the viewport tracker, read by the frame renderer on every draw.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CanvasSurface {
    /// Width in pixels.
    pub width_px: u32,
    /// Height in pixels.
    pub height_px: u32,
}

impl CanvasSurface {
    /// Create a surface description.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Return `true` when either dimension is zero; nothing can be drawn.
    pub fn is_empty(self) -> bool {
        self.width_px == 0 || self.height_px == 0
    }

    /// Width divided by height, or `None` for an empty surface.
    pub fn aspect(self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(f64::from(self.width_px) / f64::from(self.height_px))
    }

    /// Dimensions narrowed to `u16`, as required by the CPU rasterizer.
    pub fn to_u16(self) -> ReelResult<(u16, u16)> {
        let w: u16 = self
            .width_px
            .try_into()
            .map_err(|_| ReelError::render("surface width exceeds u16"))?;
        let h: u16 = self
            .height_px
            .try_into()
            .map_err(|_| ReelError::render("surface height exceeds u16"))?;
        Ok((w, h))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        use crate::foundation::math::mul_div255_u8;

        let a16 = u16::from(a);
        Self {
            r: mul_div255_u8(u16::from(r), a16),
            g: mul_div255_u8(u16::from(g), a16),
            b: mul_div255_u8(u16::from(b), a16),
            a,
        }
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
