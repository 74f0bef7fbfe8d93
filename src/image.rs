use crate::color::{Pixel, BYTES_PER_PIXEL};
use crate::error::Error;
use crate::Result;

pub mod compositor;
pub mod reader;
pub mod writer;

pub trait ImageReader {
    fn read_image(&mut self) -> Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> Result<()>;
}

/// 8-bit RGB image stored as one contiguous, row-major byte buffer without padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Allocates a black image. Fails for zero dimensions or if the buffer
    /// size is not addressable.
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        let length = Self::buffer_length(width, height)?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(length)
            .map_err(|_| Error::AllocationFailed { width, height })?;
        pixels.resize(length, 0);
        Ok(Image {
            width,
            height,
            pixels,
        })
    }

    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = Self::buffer_length(width, height)?;
        if pixels.len() != expected {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndBuffer {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Image {
            width,
            height,
            pixels,
        })
    }

    fn buffer_length(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::AllocationFailed { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|dots| dots.checked_mul(BYTES_PER_PIXEL))
            .ok_or(Error::AllocationFailed { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn row_size(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    pub fn row(&self, y: u32) -> Result<&[u8]> {
        let range = self.row_range(y)?;
        Ok(&self.pixels[range])
    }

    pub fn row_mut(&mut self, y: u32) -> Result<&mut [u8]> {
        let range = self.row_range(y)?;
        Ok(&mut self.pixels[range])
    }

    fn row_range(&self, y: u32) -> Result<std::ops::Range<usize>> {
        if y >= self.height {
            return Err(Error::RowOutOfRange {
                y,
                height: self.height,
            });
        }
        let start = y as usize * self.row_size();
        Ok(start..start + self.row_size())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        let offset = self.pixel_offset(x, y)?;
        let mut bytes = [0; BYTES_PER_PIXEL];
        bytes.copy_from_slice(&self.pixels[offset..offset + BYTES_PER_PIXEL]);
        Ok(Pixel::from(bytes))
    }

    pub fn set_pixel(&mut self, pixel: Pixel, x: u32, y: u32) -> Result<()> {
        let offset = self.pixel_offset(x, y)?;
        self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&pixel.to_bytes());
        Ok(())
    }

    fn pixel_offset(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(self.index_out_of_range(x, y));
        }
        Ok(y as usize * self.row_size() + x as usize * BYTES_PER_PIXEL)
    }

    fn index_out_of_range(&self, x: u32, y: u32) -> Error {
        Error::IndexOutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Copies `source` row by row into this image with its top left corner at (x, y).
    /// Nothing is written if the region does not fit.
    pub fn paste(&mut self, source: &Image, x: u32, y: u32) -> Result<()> {
        self.check_region_fits(source, x, y)?;
        let dest_row_size = self.row_size();
        let source_row_size = source.row_size();
        let mut dest_start = y as usize * dest_row_size + x as usize * BYTES_PER_PIXEL;
        for source_row in source.pixels.chunks_exact(source_row_size) {
            self.pixels[dest_start..dest_start + source_row_size].copy_from_slice(source_row);
            dest_start += dest_row_size;
        }
        Ok(())
    }

    fn check_region_fits(&self, source: &Image, x: u32, y: u32) -> Result<()> {
        let fits_horizontally = x
            .checked_add(source.width)
            .is_some_and(|right| right <= self.width);
        let fits_vertically = y
            .checked_add(source.height)
            .is_some_and(|bottom| bottom <= self.height);
        if !fits_horizontally || !fits_vertically {
            return Err(Error::RegionOutOfBounds {
                x,
                y,
                region_width: source.width,
                region_height: source.height,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
impl Image {
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let mut image = Image::blank(width, height).unwrap();
        for chunk in image.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&pixel.to_bytes());
        }
        image
    }
}
