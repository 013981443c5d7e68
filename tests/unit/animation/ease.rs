use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::OutQuad,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::SmoothStep,
];

#[test]
fn curves_pin_endpoints() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
    }
}

#[test]
fn curves_are_monotonic_on_unit_interval() {
    for e in ALL {
        let mut prev = e.apply(0.0);
        for i in 1..=64 {
            let v = e.apply(f64::from(i) / 64.0);
            assert!(v >= prev, "{e:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::SmoothStep.apply(7.0), 1.0);
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
}

#[test]
fn default_is_linear_and_serde_names_are_variant_names() {
    assert_eq!(Ease::default(), Ease::Linear);
    let e: Ease = serde_json::from_str("\"SmoothStep\"").unwrap();
    assert_eq!(e, Ease::SmoothStep);
}
