use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};

use crate::assets::decode::{PreparedImage, decode_image};
use crate::assets::naming::{FrameEntry, FrameNaming};
use crate::assets::source::FrameSource;
use crate::config::LoaderConfig;
use crate::foundation::error::{ReelError, ReelResult};

/// Load status of one frame. `Ready` and `Failed` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetStatus {
    /// Fetch issued, result not yet applied.
    Pending,
    /// Decoded and drawable.
    Ready,
    /// Fetch or decode failed; never retried.
    Failed,
}

/// One frame of the sequence.
#[derive(Clone, Debug)]
pub struct FrameAsset {
    /// Dense zero-based playback position.
    pub index: usize,
    /// External order number the asset was named by.
    pub sequence_number: u32,
    /// URI the bytes were fetched from.
    pub source_path: String,
    status: AssetStatus,
    pixel_width: u32,
    pixel_height: u32,
    image: Option<PreparedImage>,
}

impl FrameAsset {
    fn pending(index: usize, entry: FrameEntry) -> Self {
        Self {
            index,
            sequence_number: entry.sequence_number,
            source_path: entry.uri,
            status: AssetStatus::Pending,
            pixel_width: 0,
            pixel_height: 0,
            image: None,
        }
    }

    /// Current load status.
    pub fn status(&self) -> AssetStatus {
        self.status
    }

    /// Return `true` once the pixels are available.
    pub fn is_ready(&self) -> bool {
        self.status == AssetStatus::Ready
    }

    /// Decoded width, `0` until ready.
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    /// Decoded height, `0` until ready.
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    /// Decoded pixels, present only when ready.
    pub fn image(&self) -> Option<&PreparedImage> {
        self.image.as_ref()
    }
}

/// Count of frames per status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadCounts {
    /// Frames still loading.
    pub pending: usize,
    /// Frames ready to draw.
    pub ready: usize,
    /// Frames that failed.
    pub failed: usize,
}

/// Ordered, fixed-length frame table.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<FrameAsset>,
}

impl FrameSequence {
    /// Create an all-pending sequence from resolved entries, in order.
    pub fn new(entries: Vec<FrameEntry>) -> Self {
        Self {
            frames: entries
                .into_iter()
                .enumerate()
                .map(|(i, e)| FrameAsset::pending(i, e))
                .collect(),
        }
    }

    /// Number of frames; fixed at construction.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when the sequence has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`.
    pub fn get(&self, index: usize) -> Option<&FrameAsset> {
        self.frames.get(index)
    }

    /// Frames in playback order.
    pub fn iter(&self) -> impl Iterator<Item = &FrameAsset> {
        self.frames.iter()
    }

    /// Count of frames per status.
    pub fn counts(&self) -> LoadCounts {
        let mut c = LoadCounts::default();
        for f in &self.frames {
            match f.status {
                AssetStatus::Pending => c.pending += 1,
                AssetStatus::Ready => c.ready += 1,
                AssetStatus::Failed => c.failed += 1,
            }
        }
        c
    }

    /// Apply a fetch result. Only `Pending` frames transition; returns the new status.
    pub(crate) fn settle(
        &mut self,
        index: usize,
        result: ReelResult<PreparedImage>,
    ) -> Option<AssetStatus> {
        let asset = self.frames.get_mut(index)?;
        if asset.status != AssetStatus::Pending {
            tracing::trace!(index, "ignoring result for settled frame");
            return None;
        }
        match result {
            Ok(img) => {
                asset.pixel_width = img.width;
                asset.pixel_height = img.height;
                asset.image = Some(img);
                asset.status = AssetStatus::Ready;
            }
            Err(err) => {
                tracing::warn!(
                    index,
                    sequence_number = asset.sequence_number,
                    uri = %asset.source_path,
                    error = %err,
                    "frame asset failed to load"
                );
                asset.status = AssetStatus::Failed;
            }
        }
        Some(asset.status)
    }
}

struct FetchDone {
    index: usize,
    result: ReelResult<PreparedImage>,
}

/// Preloads a frame sequence off the render loop.
///
/// Fetch and decode run on a private thread pool. Results are applied to the [`FrameSequence`]
/// only from [`AssetLoader::poll`] / [`AssetLoader::wait_all`], i.e. on the thread that owns the
/// loader, so readers never observe a frame mid-update.
pub struct AssetLoader {
    sequence: FrameSequence,
    source: Arc<dyn FrameSource>,
    threads: Option<usize>,
    pool: Option<rayon::ThreadPool>,
    rx: Option<mpsc::Receiver<FetchDone>>,
    cancelled: Arc<AtomicBool>,
}

impl std::fmt::Debug for AssetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetLoader")
            .field("len", &self.sequence.len())
            .field("counts", &self.sequence.counts())
            .field("started", &self.rx.is_some())
            .finish()
    }
}

impl AssetLoader {
    /// Resolve `naming` into an all-pending sequence. No fetch starts until [`AssetLoader::init`].
    pub fn new(
        naming: &FrameNaming,
        source: Arc<dyn FrameSource>,
        cfg: &LoaderConfig,
    ) -> ReelResult<Self> {
        cfg.validate()?;
        let entries = naming.resolve()?;
        Ok(Self {
            sequence: FrameSequence::new(entries),
            source,
            threads: cfg.threads,
            pool: None,
            rx: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Start one fetch per frame without blocking. Calling again is a no-op.
    pub fn init(&mut self) -> ReelResult<()> {
        if self.rx.is_some() || self.cancelled.load(Ordering::Relaxed) {
            return Ok(());
        }

        let pool = build_fetch_pool(self.threads)?;
        let (tx, rx) = mpsc::channel::<FetchDone>();
        for asset in self.sequence.iter() {
            let tx = tx.clone();
            let source = Arc::clone(&self.source);
            let cancelled = Arc::clone(&self.cancelled);
            let index = asset.index;
            let uri = asset.source_path.clone();
            pool.spawn(move || {
                if cancelled.load(Ordering::Relaxed) {
                    return;
                }
                let result = source.fetch(&uri).and_then(|bytes| decode_image(&bytes));
                // The receiver is gone after dispose; the result is simply dropped.
                let _ = tx.send(FetchDone { index, result });
            });
        }

        tracing::debug!(frames = self.sequence.len(), "frame preload started");
        self.pool = Some(pool);
        self.rx = Some(rx);
        Ok(())
    }

    /// Apply every completed fetch without blocking. Returns indices that changed status.
    pub fn poll(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        let Some(rx) = self.rx.as_ref() else {
            return changed;
        };
        while let Ok(done) = rx.try_recv() {
            if self.sequence.settle(done.index, done.result).is_some() {
                changed.push(done.index);
            }
        }
        self.log_if_settled(&changed);
        changed
    }

    /// Block until no frame is pending. Returns indices that changed status.
    pub fn wait_all(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        let Some(rx) = self.rx.as_ref() else {
            return changed;
        };
        while self.sequence.counts().pending > 0 {
            let Ok(done) = rx.recv() else {
                break;
            };
            if self.sequence.settle(done.index, done.result).is_some() {
                changed.push(done.index);
            }
        }
        self.log_if_settled(&changed);
        changed
    }

    /// Frame at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&FrameAsset> {
        self.sequence.get(index)
    }

    /// Return `true` when the frame at `index` exists and is ready.
    pub fn is_ready(&self, index: usize) -> bool {
        self.get(index).is_some_and(FrameAsset::is_ready)
    }

    /// Read-only view of the frame table.
    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }

    /// Count of frames per status.
    pub fn counts(&self) -> LoadCounts {
        self.sequence.counts()
    }

    /// Return `true` after [`AssetLoader::dispose`].
    pub fn is_disposed(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Abandon outstanding fetches. Fetches not yet started are skipped; results of running
    /// ones are discarded. Frames already settled stay readable.
    pub fn dispose(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
        self.rx = None;
        self.pool = None;
        tracing::debug!(counts = ?self.sequence.counts(), "frame loader disposed");
    }

    fn log_if_settled(&self, changed: &[usize]) {
        if changed.is_empty() {
            return;
        }
        let counts = self.sequence.counts();
        if counts.pending == 0 {
            tracing::debug!(
                ready = counts.ready,
                failed = counts.failed,
                "frame preload finished"
            );
        }
    }
}

fn build_fetch_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|i| format!("scrollreel-fetch-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::asset(format!("failed to build frame fetch pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
