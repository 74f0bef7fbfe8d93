use std::io::{BufRead, Seek};

use image::{ColorType, DynamicImage, ImageError, ImageFormat};

use super::super::{Image, ImageReader};
use crate::{error::Error, Result};

/// Decodes a PNG of any bit depth and color type into 8-bit RGB, dropping alpha.
pub struct PngImageReader<R: BufRead + Seek> {
    reader: R,
    source: String,
}

impl<R: BufRead + Seek> PngImageReader<R> {
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        Self {
            reader,
            source: source.into(),
        }
    }

    fn decode_error(&self, error: ImageError) -> Error {
        Error::FailedToDecodeImage(self.source.clone(), error)
    }
}

impl<R: BufRead + Seek> ImageReader for PngImageReader<R> {
    fn read_image(&mut self) -> Result<Image> {
        let mut reader = image::ImageReader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(|e| Error::FailedToDecodeImage(self.source.clone(), ImageError::IoError(e)))?;
        if reader.format() != Some(ImageFormat::Png) {
            return Err(Error::NotAPngFile(self.source.clone()));
        }
        reader.no_limits();
        let decoded = reader.decode().map_err(|e| self.decode_error(e))?;
        let (width, height, pixels) = strip_to_rgb8(decoded);
        if width == 0 || height == 0 {
            return Err(Error::ImageHasNoPixels(self.source.clone()));
        }
        Image::from_raw(width, height, pixels)
    }
}

/// 16-bit samples keep their high byte only, everything else goes through `into_rgb8`.
fn strip_to_rgb8(decoded: DynamicImage) -> (u32, u32, Vec<u8>) {
    match decoded.color() {
        ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => {
            let rgb = decoded.into_rgb16();
            let (width, height) = rgb.dimensions();
            let pixels = rgb
                .into_raw()
                .into_iter()
                .map(|sample| (sample >> 8) as u8)
                .collect();
            (width, height, pixels)
        }
        _ => {
            let rgb = decoded.into_rgb8();
            let (width, height) = rgb.dimensions();
            (width, height, rgb.into_raw())
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, ImageError};

    use super::PngImageReader;
    use crate::{
        color::Pixel,
        error::Error,
        image::{Image, ImageReader},
    };

    fn encode(bytes: &[u8], width: u32, height: u32, color_type: ExtendedColorType) -> Vec<u8> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(bytes, width, height, color_type)
            .unwrap();
        png
    }

    const PALETTE_WITH_TRANSPARENCY: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/palette_transparency.png"
    ));
    const ADAM7_INTERLACED: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/interlaced.png"
    ));
    // 13000x14000 RGB header followed by far too little image data
    const OVERSIZED_TRUNCATED: &[u8] = include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/oversized_truncated.png"
    ));

    fn decode(png: Vec<u8>) -> crate::Result<Image> {
        PngImageReader::new(Cursor::new(png), "memory").read_image()
    }

    #[test]
    fn read_rgb() {
        let bytes = [255, 0, 0, 0, 255, 0, 0, 0, 255, 1, 2, 3];
        let image = decode(encode(&bytes, 2, 2, ExtendedColorType::Rgb8)).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.as_bytes(), &bytes);
    }

    #[test]
    fn read_rgba_drops_alpha() {
        let bytes = [10, 20, 30, 0, 40, 50, 60, 255];
        let image = decode(encode(&bytes, 2, 1, ExtendedColorType::Rgba8)).unwrap();
        assert_eq!(image.pixel(0, 0).unwrap(), Pixel::new(10, 20, 30));
        assert_eq!(image.pixel(1, 0).unwrap(), Pixel::new(40, 50, 60));
    }

    #[test]
    fn read_grayscale_expands_to_rgb() {
        let image = decode(encode(&[7, 200], 1, 2, ExtendedColorType::L8)).unwrap();
        assert_eq!(image.pixel(0, 0).unwrap(), Pixel::new(7, 7, 7));
        assert_eq!(image.pixel(0, 1).unwrap(), Pixel::new(200, 200, 200));
    }

    #[test]
    fn read_16_bit_strips_to_8_bit() {
        let bytes: Vec<u8> = [0xFFFFu16, 0x0000, 0x8080]
            .iter()
            .flat_map(|c| c.to_ne_bytes())
            .collect();
        let image = decode(encode(&bytes, 1, 1, ExtendedColorType::Rgb16)).unwrap();
        assert_eq!(image.pixel(0, 0).unwrap(), Pixel::new(255, 0, 128));
    }

    #[test]
    fn read_16_bit_keeps_high_byte() {
        let bytes: Vec<u8> = [0x00FFu16, 0x80FF, 0xFE80]
            .iter()
            .flat_map(|c| c.to_ne_bytes())
            .collect();
        let image = decode(encode(&bytes, 1, 1, ExtendedColorType::Rgb16)).unwrap();
        assert_eq!(image.pixel(0, 0).unwrap(), Pixel::new(0, 128, 254));
    }

    #[test]
    fn read_16_bit_grayscale_with_alpha_keeps_high_byte() {
        let bytes: Vec<u8> = [0x01FFu16, 0x0000]
            .iter()
            .flat_map(|c| c.to_ne_bytes())
            .collect();
        let image = decode(encode(&bytes, 1, 1, ExtendedColorType::La16)).unwrap();
        assert_eq!(image.pixel(0, 0).unwrap(), Pixel::new(1, 1, 1));
    }

    #[test]
    fn read_palette_with_transparency() {
        let image = decode(PALETTE_WITH_TRANSPARENCY.to_vec()).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        #[rustfmt::skip]
        let expected: &[u8] = &[
             10,  20, 30,   200, 100, 50,
              0, 255,  0,   200, 100, 50,
        ];
        assert_eq!(image.as_bytes(), expected);
    }

    #[test]
    fn read_adam7_interlaced() {
        let image = decode(ADAM7_INTERLACED.to_vec()).unwrap();
        assert_eq!(image.width(), 5);
        assert_eq!(image.height(), 5);
        for y in 0..5u8 {
            for x in 0..5u8 {
                assert_eq!(
                    image.pixel(x as u32, y as u32).unwrap(),
                    Pixel::new(x * 40, y * 40, x + y * 5),
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn large_image_is_not_rejected_by_allocation_limits() {
        match decode(OVERSIZED_TRUNCATED.to_vec()) {
            Err(Error::FailedToDecodeImage(_, ImageError::Limits(e))) => {
                panic!("Decoding was stopped by allocation limits: {}", e)
            }
            Err(Error::FailedToDecodeImage(..)) => {}
            Err(e) => panic!("Unexpected error: {}", e),
            Ok(_) => panic!("Truncated image data was accepted"),
        }
    }

    #[test]
    fn reject_file_which_is_not_a_png() {
        let result = decode(b"P3\n1 1\n255\n0 0 0\n".to_vec());
        if let Err(Error::NotAPngFile(source)) = result {
            assert_eq!(source, "memory");
            return;
        }
        panic!("Non png input was not rejected");
    }

    #[test]
    fn reject_truncated_png() {
        let mut png = encode(&[1, 2, 3], 1, 1, ExtendedColorType::Rgb8);
        png.truncate(20);
        assert!(matches!(decode(png), Err(Error::FailedToDecodeImage(..))));
    }
}
