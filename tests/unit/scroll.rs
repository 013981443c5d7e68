use std::cell::RefCell;

use super::*;
use crate::foundation::core::CanvasSurface;
use crate::host::SimulatedHost;

const REGION: ScrollRegion = ScrollRegion {
    top: 100.0,
    height: 400.0,
};

#[test]
fn progress_formula_clamps_to_unit_range() {
    assert_eq!(compute_progress(100.0, REGION), 0.0);
    assert_eq!(compute_progress(300.0, REGION), 0.5);
    assert_eq!(compute_progress(500.0, REGION), 1.0);
    assert_eq!(compute_progress(0.0, REGION), 0.0);
    assert_eq!(compute_progress(9_000.0, REGION), 1.0);
    assert!((compute_progress(200.0, REGION) - 0.25).abs() < 1e-12);
}

#[test]
fn zero_height_region_is_a_step() {
    let flat = ScrollRegion {
        top: 50.0,
        height: 0.0,
    };
    assert_eq!(compute_progress(49.0, flat), 0.0);
    assert_eq!(compute_progress(50.0, flat), 1.0);
    let inverted = ScrollRegion {
        top: 50.0,
        height: -10.0,
    };
    assert_eq!(compute_progress(10.0, inverted), 0.0);
}

#[test]
fn scroll_ticks_report_latest_and_previous() {
    let host = Rc::new(SimulatedHost::new(CanvasSurface::new(100, 100), REGION));
    let mut src = ScrollProgressSource::new(host.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    src.subscribe(move |c| s.borrow_mut().push(*c));

    host.set_scroll_offset(300.0);
    assert_eq!(src.init(), 0.5);
    assert!(seen.borrow().is_empty());

    host.set_scroll_offset(500.0);
    assert_eq!(
        src.on_scroll(),
        Some(ProgressChange {
            latest: 1.0,
            previous: 0.5
        })
    );
    host.set_scroll_offset(800.0);
    assert_eq!(src.on_scroll(), None);

    host.scroll_to_progress(0.25);
    src.on_scroll();
    assert_eq!(src.progress(), 0.25);
    assert_eq!(
        *seen.borrow(),
        vec![
            ProgressChange {
                latest: 1.0,
                previous: 0.5
            },
            ProgressChange {
                latest: 0.25,
                previous: 1.0
            },
        ]
    );
}

#[test]
fn disposed_source_stops_emitting() {
    let host = Rc::new(SimulatedHost::new(CanvasSurface::new(100, 100), REGION));
    let mut src = ScrollProgressSource::new(host.clone());
    let count = Rc::new(RefCell::new(0));
    let c = Rc::clone(&count);
    let id = src.subscribe(move |_| *c.borrow_mut() += 1);
    src.init();

    host.set_scroll_offset(200.0);
    src.on_scroll();
    assert_eq!(*count.borrow(), 1);

    src.dispose();
    assert!(!src.unsubscribe(id));
    host.set_scroll_offset(400.0);
    assert_eq!(src.on_scroll(), None);
    assert_eq!(*count.borrow(), 1);
}
