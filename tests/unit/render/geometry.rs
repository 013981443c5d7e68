use super::*;

#[test]
fn hd_canvas_with_four_by_three_image_crops_top_and_bottom() {
    let fit = cover_fit(800, 600, CanvasSurface::new(1920, 1080)).unwrap();
    assert_eq!(fit.draw_width, 1920.0);
    assert_eq!(fit.draw_height, 1440.0);
    assert_eq!(fit.x_offset, 0.0);
    assert_eq!(fit.y_offset, -180.0);
    assert!(fit.crops());
    assert_eq!(fit.rect(), Rect::new(0.0, -180.0, 1920.0, 1260.0));
}

#[test]
fn wide_image_on_portrait_canvas_crops_left_and_right() {
    let fit = cover_fit(1920, 1080, CanvasSurface::new(390, 844)).unwrap();
    assert_eq!(fit.draw_height, 844.0);
    assert!(fit.draw_width > 390.0);
    assert_eq!(fit.y_offset, 0.0);
    assert_eq!(fit.x_offset, (390.0 - fit.draw_width) / 2.0);
    assert!(fit.x_offset < 0.0);
}

#[test]
fn matching_aspect_fills_exactly() {
    let fit = cover_fit(160, 90, CanvasSurface::new(1920, 1080)).unwrap();
    assert_eq!(
        (fit.x_offset, fit.y_offset, fit.draw_width, fit.draw_height),
        (0.0, 0.0, 1920.0, 1080.0)
    );
    assert!(!fit.crops());
}

#[test]
fn cover_always_covers_the_canvas() {
    let images = [(1, 1), (800, 600), (600, 800), (1920, 1080), (3, 1000), (1000, 3)];
    let canvases = [(1, 1), (1920, 1080), (1080, 1920), (640, 480), (7, 5), (4096, 17)];
    for (iw, ih) in images {
        for (cw, ch) in canvases {
            let fit = cover_fit(iw, ih, CanvasSurface::new(cw, ch)).unwrap();
            let (cw, ch) = (f64::from(cw), f64::from(ch));
            assert!(fit.draw_width >= cw, "{iw}x{ih} on {cw}x{ch}");
            assert!(fit.draw_height >= ch, "{iw}x{ih} on {cw}x{ch}");
            assert!(fit.draw_width == cw || fit.draw_height == ch);
            assert_eq!(fit.x_offset, (cw - fit.draw_width) / 2.0);
            assert_eq!(fit.y_offset, (ch - fit.draw_height) / 2.0);
            assert!(fit.x_offset <= 0.0 && fit.y_offset <= 0.0);
        }
    }
}

#[test]
fn empty_inputs_have_no_fit() {
    assert!(cover_fit(0, 10, CanvasSurface::new(10, 10)).is_none());
    assert!(cover_fit(10, 10, CanvasSurface::new(0, 10)).is_none());
}
