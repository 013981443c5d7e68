use std::io::Cursor;

use super::*;
use crate::assets::source::MemoryFrameSource;

fn png(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([200, 10, 10, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn naming(n: u32) -> FrameNaming {
    FrameNaming::table((0..n).map(|i| (i, format!("f{i}.png"))))
}

fn loader(naming: &FrameNaming, src: MemoryFrameSource) -> AssetLoader {
    AssetLoader::new(naming, Arc::new(src), &LoaderConfig { threads: Some(2) }).unwrap()
}

#[test]
fn failures_are_isolated_per_frame() {
    let src = MemoryFrameSource::new()
        .with("f0.png", png(4, 3))
        .with("f1.png", png(2, 2))
        .with("f3.png", b"not an image".to_vec());
    let mut l = loader(&naming(4), src);
    l.init().unwrap();
    let mut changed = l.wait_all();
    changed.sort_unstable();
    assert_eq!(changed, vec![0, 1, 2, 3]);

    assert_eq!(
        l.counts(),
        LoadCounts {
            pending: 0,
            ready: 2,
            failed: 2
        }
    );
    assert!(l.is_ready(0));
    assert!(l.is_ready(1));
    assert_eq!(l.get(2).unwrap().status(), AssetStatus::Failed);
    assert_eq!(l.get(3).unwrap().status(), AssetStatus::Failed);
    assert!(l.get(3).unwrap().image().is_none());

    let f0 = l.get(0).unwrap();
    assert_eq!((f0.pixel_width(), f0.pixel_height()), (4, 3));
    assert_eq!(f0.source_path, "f0.png");
    assert_eq!(f0.sequence_number, 0);
    assert!(l.get(4).is_none());
    assert!(!l.is_ready(99));
}

#[test]
fn nothing_loads_before_init() {
    let mut l = loader(&naming(2), MemoryFrameSource::new().with("f0.png", png(1, 1)));
    assert_eq!(l.sequence().len(), 2);
    assert!(l.poll().is_empty());
    assert!(l.wait_all().is_empty());
    assert_eq!(l.counts().pending, 2);
    assert_eq!(l.get(0).unwrap().status(), AssetStatus::Pending);
}

#[test]
fn init_is_idempotent() {
    let src = MemoryFrameSource::new().with("f0.png", png(1, 1));
    let mut l = loader(&naming(1), src);
    l.init().unwrap();
    l.init().unwrap();
    l.wait_all();
    assert_eq!(l.counts().ready, 1);
    assert!(l.poll().is_empty());
}

#[test]
fn dispose_stops_applying_results() {
    let src = MemoryFrameSource::new().with("f0.png", png(1, 1));
    let mut l = loader(&naming(3), src);
    l.dispose();
    assert!(l.is_disposed());
    l.init().unwrap();
    assert!(l.poll().is_empty());
    assert!(l.wait_all().is_empty());
    assert_eq!(l.counts().pending, 3);
}

#[test]
fn terminal_states_never_change() {
    let mut seq = FrameSequence::new(naming(2).resolve().unwrap());
    let img = decode_image(&png(2, 1)).unwrap();

    assert_eq!(seq.settle(0, Ok(img.clone())), Some(AssetStatus::Ready));
    assert_eq!(seq.settle(0, Err(ReelError::asset("late failure"))), None);
    assert_eq!(seq.get(0).unwrap().status(), AssetStatus::Ready);

    assert_eq!(
        seq.settle(1, Err(ReelError::asset("boom"))),
        Some(AssetStatus::Failed)
    );
    assert_eq!(seq.settle(1, Ok(img)), None);
    assert_eq!(seq.get(1).unwrap().status(), AssetStatus::Failed);
    assert_eq!(seq.settle(7, Err(ReelError::asset("x"))), None);
}

#[test]
fn zero_threads_is_rejected() {
    let err = AssetLoader::new(
        &naming(1),
        Arc::new(MemoryFrameSource::new()),
        &LoaderConfig { threads: Some(0) },
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}
