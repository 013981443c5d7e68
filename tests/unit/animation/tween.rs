use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn linear_tween_samples_proportionally() {
    let tw = Tween::new(0.0, 10.0, ms(100), ms(200), Ease::Linear);
    assert_eq!(tw.sample(ms(100)), 0.0);
    assert!((tw.sample(ms(150)) - 2.5).abs() < 1e-9);
    assert!((tw.sample(ms(200)) - 5.0).abs() < 1e-9);
    assert_eq!(tw.sample(ms(300)), 10.0);
    assert!(tw.is_done(ms(300)));
    assert!(!tw.is_done(ms(299)));
}

#[test]
fn samples_before_start_hold_origin() {
    let tw = Tween::new(4.0, 8.0, ms(500), ms(200), Ease::Linear);
    assert_eq!(tw.elapsed(ms(10)), Duration::ZERO);
    assert_eq!(tw.sample(ms(10)), 4.0);
}

#[test]
fn zero_duration_completes_immediately() {
    let tw = Tween::new(1.0, 3.0, ms(0), Duration::ZERO, Ease::OutCubic);
    assert!(tw.is_done(ms(0)));
    assert_eq!(tw.sample(ms(0)), 3.0);
}

#[test]
fn eased_tween_keeps_endpoints() {
    let tw = Tween::new(-2.0, 6.0, ms(0), ms(200), Ease::SmoothStep);
    assert_eq!(tw.sample(ms(0)), -2.0);
    assert_eq!(tw.sample(ms(200)), 6.0);
    assert_eq!(tw.from(), -2.0);
    assert_eq!(tw.to(), 6.0);
}
