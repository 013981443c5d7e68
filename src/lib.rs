//! scrollreel plays an ordered image sequence in step with a page scroll position.
//!
//! The public API is reel-oriented:
//!
//! - Load a [`ReelConfig`] and pick a [`FrameSource`]
//! - Create a [`ScrollReel`] over a host ([`ViewportHost`] + [`ScrollHost`]) and a [`DrawSurface`]
//! - Forward host scroll and resize callbacks, and call [`ScrollReel::tick`] once per host frame
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod animation;
pub mod config;
pub mod host;
pub mod render;
pub mod scroll;
pub mod session;
pub mod viewport;

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolator::{IndexInterpolator, InterpolationState, target_index};
pub use crate::animation::tween::Tween;
pub use crate::assets::decode::{PreparedImage, decode_image};
pub use crate::assets::loader::{AssetLoader, AssetStatus, FrameAsset, FrameSequence, LoadCounts};
pub use crate::assets::naming::{FrameEntry, FrameNaming, legacy_file_name};
pub use crate::assets::source::{
    FrameSource, FsFrameSource, MemoryFrameSource, normalize_rel_path,
};
pub use crate::config::{LoaderConfig, ReelConfig, TweenConfig};
pub use crate::foundation::core::{CanvasSurface, Rgba8Premul};
pub use crate::foundation::error::{ReelError, ReelResult};
pub use crate::foundation::math::{clamp_unit, floor_index, lerp};
pub use crate::foundation::observe::SubscriptionId;
pub use crate::host::{ScrollHost, ScrollRegion, SimulatedHost, ViewportHost};
pub use crate::render::geometry::{CoverFit, cover_fit};
pub use crate::render::renderer::{FrameRenderer, RenderOutcome, SkipReason};
pub use crate::render::surface::{CpuSurface, DrawCall, DrawSurface, FrameRGBA, RecordingSurface};
pub use crate::scroll::{ProgressChange, ScrollProgressSource, compute_progress};
pub use crate::session::{ScrollReel, TickReport};
pub use crate::viewport::ViewportTracker;
