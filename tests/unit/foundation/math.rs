use super::*;

#[test]
fn lerp_endpoints_are_exact() {
    let samples = [
        (0.0, 1.0),
        (3.7, -12.25),
        (1e-9, 1e9),
        (25.0, 0.1),
        (-0.3, 0.30000000000000004),
    ];
    for (a, b) in samples {
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
    assert_eq!(lerp(0.0, 12.5, 0.5), 6.25);
}

#[test]
fn clamp_unit_handles_out_of_range_and_nan() {
    assert_eq!(clamp_unit(-0.5), 0.0);
    assert_eq!(clamp_unit(1.5), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
    assert_eq!(clamp_unit(f64::NAN), 0.0);
}

#[test]
fn floor_index_rejects_negative_and_non_finite() {
    assert_eq!(floor_index(5.3), Some(5));
    assert_eq!(floor_index(0.0), Some(0));
    assert_eq!(floor_index(12.999), Some(12));
    assert_eq!(floor_index(-0.01), None);
    assert_eq!(floor_index(f64::NAN), None);
    assert_eq!(floor_index(f64::INFINITY), None);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}
