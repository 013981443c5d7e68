/// Easing curves that reshape normalized tween progress.
///
/// Every curve maps `0 -> 0` and `1 -> 1`, so a tween still starts at its origin and lands on its
/// target whichever curve is configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity: the tween advances proportionally to elapsed time.
    #[default]
    Linear,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Hermite smoothstep `t² (3 - 2t)`.
    SmoothStep,
}

impl Ease {
    /// Reshape normalized tween time `t`. Input outside `[0, 1]` is clamped first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - u * u,
            Self::OutCubic => 1.0 - u * u * u,
            Self::InOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::InOutCubic => {
                let v = 2.0 * u;
                1.0 - v * v * v / 2.0
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
