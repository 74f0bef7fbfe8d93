use super::Image;
use crate::{error::Error, logger::log_placement, Result};

/// Top left corner of an input image on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

impl CanvasLayout {
    /// Stacks the images top to bottom in the given order. Narrower images are
    /// centered, the gap only separates consecutive images.
    pub fn compute(images: &[Image], gap: u32) -> Result<Self> {
        let width = images
            .iter()
            .map(Image::width)
            .max()
            .ok_or(Error::NoInputImages)?;
        let too_high = || Error::AllocationFailed {
            width,
            height: u32::MAX,
        };
        let mut placements = Vec::with_capacity(images.len());
        let mut cursor: u32 = 0;
        for (index, image) in images.iter().enumerate() {
            if index > 0 {
                cursor = cursor.checked_add(gap).ok_or_else(too_high)?;
            }
            placements.push(Placement {
                x: (width - image.width()) / 2,
                y: cursor,
            });
            cursor = cursor.checked_add(image.height()).ok_or_else(too_high)?;
        }
        Ok(CanvasLayout {
            width,
            height: cursor,
            placements,
        })
    }
}

pub struct StackCompositor {
    gap: u32,
}

impl StackCompositor {
    pub fn new(gap: u32) -> Self {
        StackCompositor { gap }
    }

    pub fn compose(&self, images: &[Image]) -> Result<Image> {
        let layout = CanvasLayout::compute(images, self.gap)?;
        log::info!(
            "Stacking {} images with a gap of {} into a {}x{} canvas",
            images.len(),
            self.gap,
            layout.width,
            layout.height
        );
        let mut canvas = Image::blank(layout.width, layout.height)?;
        for (index, (image, placement)) in images.iter().zip(&layout.placements).enumerate() {
            canvas.paste(image, placement.x, placement.y)?;
            log_placement(
                index,
                placement.x,
                placement.y,
                image.width(),
                image.height(),
            );
        }
        Ok(canvas)
    }
}

impl Default for StackCompositor {
    fn default() -> Self {
        Self::new(0)
    }
}
