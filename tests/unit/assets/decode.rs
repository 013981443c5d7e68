use std::io::Cursor;

use super::*;

fn encode_png(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 128u8]).unwrap();
    let prepared = decode_image(&encode_png(img)).unwrap();
    assert_eq!(prepared.width, 1);
    assert_eq!(prepared.height, 1);
    assert_eq!(
        prepared.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn opaque_pixels_pass_through_and_aspect_is_reported() {
    let img = image::RgbaImage::from_pixel(8, 6, image::Rgba([10, 20, 30, 255]));
    let prepared = decode_image(&encode_png(img)).unwrap();
    assert_eq!(prepared.rgba8_premul.len(), 8 * 6 * 4);
    assert_eq!(&prepared.rgba8_premul[..4], &[10, 20, 30, 255]);
    assert!((prepared.aspect() - 8.0 / 6.0).abs() < 1e-12);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = decode_image(b"definitely not a png").unwrap_err();
    assert!(err.to_string().contains("decode image"));
}
