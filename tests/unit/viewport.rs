use std::cell::RefCell;

use super::*;
use crate::host::SimulatedHost;

fn setup() -> (Rc<SimulatedHost>, ViewportTracker, Rc<RefCell<Vec<CanvasSurface>>>) {
    let host = Rc::new(SimulatedHost::with_screens(CanvasSurface::new(800, 600), 4.0));
    let mut tracker = ViewportTracker::new(host.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    tracker.subscribe(move |surface| s.borrow_mut().push(*surface));
    (host, tracker, seen)
}

#[test]
fn init_reports_current_size() {
    let (_host, mut tracker, seen) = setup();
    assert_eq!(tracker.surface(), CanvasSurface::default());
    assert_eq!(tracker.init(), CanvasSurface::new(800, 600));
    assert_eq!(tracker.surface(), CanvasSurface::new(800, 600));
    assert_eq!(*seen.borrow(), vec![CanvasSurface::new(800, 600)]);
}

#[test]
fn unchanged_resize_is_a_no_op() {
    let (host, mut tracker, seen) = setup();
    tracker.init();
    assert!(!tracker.on_resize());
    assert!(!tracker.on_resize());

    host.set_viewport(CanvasSurface::new(1920, 1080));
    assert!(tracker.on_resize());
    assert!(!tracker.on_resize());
    assert_eq!(
        *seen.borrow(),
        vec![CanvasSurface::new(800, 600), CanvasSurface::new(1920, 1080)]
    );
}

#[test]
fn unsubscribe_and_dispose_silence_notifications() {
    let (host, mut tracker, seen) = setup();
    let s = Rc::clone(&seen);
    let extra = tracker.subscribe(move |surface| s.borrow_mut().push(*surface));
    tracker.init();
    assert_eq!(seen.borrow().len(), 2);

    assert!(tracker.unsubscribe(extra));
    host.set_viewport(CanvasSurface::new(10, 10));
    tracker.on_resize();
    assert_eq!(seen.borrow().len(), 3);

    tracker.dispose();
    host.set_viewport(CanvasSurface::new(20, 20));
    assert!(!tracker.on_resize());
    assert_eq!(seen.borrow().len(), 3);
    assert_eq!(tracker.surface(), CanvasSurface::new(10, 10));
}
