use std::io::Write;

use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ExtendedColorType, ImageEncoder,
};

use super::super::{Image, ImageWriter};
use crate::{error::Error, Result};

/// Writes a non interlaced 8-bit RGB PNG
pub struct PngImageWriter<'a, W: Write> {
    writer: W,
    image: &'a Image,
    destination: String,
}

impl<'a, W: Write> PngImageWriter<'a, W> {
    pub fn new(writer: W, image: &'a Image, destination: impl Into<String>) -> Self {
        Self {
            writer,
            image,
            destination: destination.into(),
        }
    }
}

impl<W: Write> ImageWriter for PngImageWriter<'_, W> {
    fn write_image(&mut self) -> Result<()> {
        let encoder = PngEncoder::new_with_quality(
            &mut self.writer,
            CompressionType::Default,
            FilterType::Adaptive,
        );
        encoder
            .write_image(
                self.image.as_bytes(),
                self.image.width(),
                self.image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| Error::FailedToEncodeImage(self.destination.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::FailedToFlushOutput(self.destination.clone(), e))
    }
}
