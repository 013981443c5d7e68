/// Linear interpolation `a * (1 - t) + b * t`.
///
/// This form returns `a` exactly at `t == 0` and `b` exactly at `t == 1` for finite inputs,
/// which the `a + (b - a) * t` form does not guarantee.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Clamp into `[0, 1]`, mapping NaN to `0`.
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

/// Floor a fractional frame index into a slot index.
///
/// Negative and non-finite values have no slot.
pub fn floor_index(index: f64) -> Option<usize> {
    if !index.is_finite() || index < 0.0 {
        return None;
    }
    Some(index.floor() as usize)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
