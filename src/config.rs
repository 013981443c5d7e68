//! JSON configuration for a scroll reel.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Duration;

use crate::animation::ease::Ease;
use crate::assets::naming::FrameNaming;
use crate::foundation::error::{ReelError, ReelResult};

/// Default tween length in milliseconds.
pub const DEFAULT_TWEEN_MS: u64 = 200;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReelConfig {
    /// Frame naming scheme.
    #[serde(default)]
    pub frames: FrameNaming,
    /// Index smoothing.
    #[serde(default)]
    pub tween: TweenConfig,
    /// Straight-alpha RGBA8 painted under every frame. `None` clears to transparent.
    #[serde(default)]
    pub clear_rgba: Option<[u8; 4]>,
    /// Preloader settings.
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Tween settings for the index interpolator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TweenConfig {
    /// Tween length in milliseconds.
    #[serde(default = "default_tween_ms")]
    pub duration_ms: u64,
    /// Curve applied to normalized tween time.
    #[serde(default)]
    pub ease: Ease,
}

fn default_tween_ms() -> u64 {
    DEFAULT_TWEEN_MS
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TWEEN_MS,
            ease: Ease::Linear,
        }
    }
}

impl TweenConfig {
    /// Tween length as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Preloader settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Fetch worker count; `None` lets the pool pick.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl LoaderConfig {
    /// Reject a zero worker count.
    pub fn validate(&self) -> ReelResult<()> {
        if self.threads == Some(0) {
            return Err(ReelError::validation("loader threads must be >= 1 when set"));
        }
        Ok(())
    }
}

impl ReelConfig {
    /// Parse configuration JSON from a string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ReelError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse configuration JSON from a reader.
    pub fn from_reader(r: impl Read) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse configuration JSON from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every section.
    pub fn validate(&self) -> ReelResult<()> {
        self.frames.validate()?;
        self.loader.validate()?;
        if self.tween.duration_ms == 0 {
            return Err(ReelError::validation("tween duration_ms must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
