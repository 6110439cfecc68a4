use super::*;

#[test]
fn new_frame_is_opaque_white() {
    let frame = Frame::new(3, 2).unwrap();
    assert_eq!(frame.width(), 3);
    assert_eq!(frame.height(), 2);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(frame.pixel(x, y), Rgba8::WHITE);
        }
    }
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        Frame::new(0, 4).unwrap_err(),
        TrishardError::Validation(_)
    ));
    assert!(matches!(
        Frame::new(4, 0).unwrap_err(),
        TrishardError::Validation(_)
    ));
}

#[test]
fn set_pixel_roundtrips() {
    let mut frame = Frame::new(4, 4).unwrap();
    let color = Rgba8::new(12, 34, 56, 200);
    frame.set_pixel(2, 3, color);
    assert_eq!(frame.pixel(2, 3), color);
    assert_eq!(frame.pixel(2, 2), Rgba8::WHITE);
}

#[test]
fn fill_overwrites_everything() {
    let mut frame = Frame::new(2, 2).unwrap();
    frame.set_pixel(0, 0, Rgba8::BLACK);
    frame.fill(Rgba8::new(1, 2, 3, 4));
    for px in frame.data().chunks_exact(4) {
        assert_eq!(px, [1, 2, 3, 4]);
    }
}

#[test]
fn into_rgba_image_keeps_dimensions_and_bytes() {
    let mut frame = Frame::new(2, 1).unwrap();
    frame.set_pixel(1, 0, Rgba8::BLACK);
    let img = frame.into_rgba_image();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 255]);
}
