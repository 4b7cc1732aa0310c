use anyhow::Context as _;

use crate::error::CarouselResult;

/// One decoded frame, tightly packed row-major RGB8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Decode an image and normalize it to RGB8.
///
/// Any other color mode (RGBA, grayscale, palette) is converted; alpha is
/// dropped, not composited.
pub fn decode_rgb(bytes: &[u8]) -> CarouselResult<FrameRgb> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(FrameRgb {
        width,
        height,
        data: rgb.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn decode_rgba_png_drops_alpha() {
        let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
        let img = image::RgbaImage::from_raw(1, 1, src_rgba).unwrap();

        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let frame = decode_rgb(&buf).unwrap();
        assert_eq!(frame.width, 1);
        assert_eq!(frame.height, 1);
        assert_eq!(frame.data, vec![100u8, 50u8, 200u8]);
    }

    #[test]
    fn decode_grayscale_png_expands_to_rgb() {
        let img = image::GrayImage::from_raw(2, 1, vec![7u8, 250u8]).unwrap();

        let mut buf = Vec::new();
        image::DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let frame = decode_rgb(&buf).unwrap();
        assert_eq!((frame.width, frame.height), (2, 1));
        assert_eq!(frame.data, vec![7, 7, 7, 250, 250, 250]);
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        assert!(decode_rgb(b"not a png").is_err());
    }
}
