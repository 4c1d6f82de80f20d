use super::*;
use crate::foundation::core::Canvas;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn png_has_signature_and_decodes_back() {
    let surface = RenderSurface::filled(
        Canvas {
            width: 3,
            height: 2,
        },
        [10, 20, 30, 255],
    )
    .unwrap();
    let png = encode_png(&surface).unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);
    let decoded = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(2, 1).0, [10, 20, 30, 255]);
}

#[test]
fn translucent_pixels_are_unpremultiplied() {
    let mut px = vec![64u8, 0, 128, 128];
    unpremultiply(&mut px);
    assert_eq!(px, vec![128, 0, 255, 128]);
}

#[test]
fn data_uri_has_prefix_and_base64_payload() {
    assert_eq!(data_uri(PNG_MIME, b"hi"), "data:image/png;base64,aGk=");
}
