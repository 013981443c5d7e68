use std::time::Duration;

use crate::animation::ease::Ease;
use crate::animation::tween::Tween;
use crate::config::TweenConfig;
use crate::foundation::math::clamp_unit;

/// Map scroll progress to a fractional frame index: `p * (len - 1)`.
///
/// Sequences of length 0 or 1 always map to index 0.
pub fn target_index(progress: f64, sequence_len: usize) -> f64 {
    if sequence_len <= 1 {
        return 0.0;
    }
    clamp_unit(progress) * (sequence_len - 1) as f64
}

/// Snapshot of a running tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolationState {
    /// Index the tween started from (the last rendered index at retarget time).
    pub previous_index: f64,
    /// Index the tween is heading to.
    pub target_index: f64,
    /// Time since the tween started.
    pub elapsed: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Running(Tween),
}

/// Smooths jumps in the scroll-mapped frame index with a short tween.
///
/// Each progress change re-arms the tween from the last rendered index; an in-flight tween is
/// replaced, never queued, so the rendered index stays continuous.
#[derive(Clone, Debug)]
pub struct IndexInterpolator {
    sequence_len: usize,
    duration: Duration,
    ease: Ease,
    phase: Phase,
    last_rendered: f64,
}

impl IndexInterpolator {
    /// Create an idle interpolator resting at index 0.
    pub fn new(sequence_len: usize, cfg: &TweenConfig) -> Self {
        Self {
            sequence_len,
            duration: cfg.duration(),
            ease: cfg.ease,
            phase: Phase::Idle,
            last_rendered: 0.0,
        }
    }

    /// Sequence length used for index mapping.
    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    /// Most recent index produced by [`IndexInterpolator::tick`] or [`IndexInterpolator::snap`].
    pub fn last_rendered(&self) -> f64 {
        self.last_rendered
    }

    /// Return `true` while a tween is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    /// Jump straight to the index for `progress` without tweening.
    pub fn snap(&mut self, progress: f64) -> f64 {
        let target = target_index(progress, self.sequence_len);
        self.phase = Phase::Idle;
        self.last_rendered = target;
        target
    }

    /// Start (or supersede) a tween toward the index for `progress`, beginning at `now`.
    ///
    /// Returns the new target index.
    pub fn retarget(&mut self, progress: f64, now: Duration) -> f64 {
        let target = target_index(progress, self.sequence_len);
        if let Phase::Running(prev) = self.phase {
            tracing::trace!(
                abandoned_target = prev.to(),
                from = self.last_rendered,
                target,
                "tween superseded"
            );
        }
        self.phase = Phase::Running(Tween::new(
            self.last_rendered,
            target,
            now,
            self.duration,
            self.ease,
        ));
        target
    }

    /// Advance to `now` and return the index to render this tick, or `None` when idle.
    ///
    /// The final sample of a tween is exactly its target; the interpolator then goes idle.
    pub fn tick(&mut self, now: Duration) -> Option<f64> {
        let Phase::Running(tween) = self.phase else {
            return None;
        };
        let v = tween.sample(now);
        self.last_rendered = v;
        if tween.is_done(now) {
            self.phase = Phase::Idle;
        }
        Some(v)
    }

    /// Current tween state, if one is running.
    pub fn state(&self, now: Duration) -> Option<InterpolationState> {
        match self.phase {
            Phase::Idle => None,
            Phase::Running(tween) => Some(InterpolationState {
                previous_index: tween.from(),
                target_index: tween.to(),
                elapsed: tween.elapsed(now),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolator.rs"]
mod tests;
