use std::time::Duration;

use crate::animation::ease::Ease;
use crate::foundation::math::{clamp_unit, lerp};

/// A time-boxed interpolation from `from` to `to`.
///
/// Time is supplied by the caller on every sample, so a tween is a pure function of `now`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    started_at: Duration,
    duration: Duration,
    ease: Ease,
}

impl Tween {
    /// Start a tween at `started_at`. A zero `duration` completes on the first sample.
    pub fn new(from: f64, to: f64, started_at: Duration, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            ease,
        }
    }

    /// Start value.
    pub fn from(&self) -> f64 {
        self.from
    }

    /// End value.
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Time elapsed since start; clocks that run backwards saturate to zero.
    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Normalized progress `elapsed / duration` in `[0, 1]`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        clamp_unit(self.elapsed(now).as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Return `true` once the full duration has elapsed.
    pub fn is_done(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Value at `now`. Lands exactly on `to` once done.
    pub fn sample(&self, now: Duration) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        lerp(self.from, self.to, self.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
