//! Scroll-progress → frame-index mapping and the smoothing tween.

pub(crate) mod ease;
pub(crate) mod interpolator;
pub(crate) mod tween;
