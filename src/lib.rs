use std::path::PathBuf;

pub use cli::CLIParser;
pub use color::Pixel;
pub use error::Error;
pub use crate::image::{
    compositor::{CanvasLayout, Placement, StackCompositor},
    reader::{png::PngImageReader, read_png_file, read_png_files},
    writer::{png::PngImageWriter, write_png_file},
    Image, ImageReader, ImageWriter,
};

mod cli;
mod color;
mod error;
mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_files: Vec<PathBuf>,
    output_file: PathBuf,
    gap_width: u32,
    number_of_threads: usize,
}

impl Arguments {
    pub fn new(input_files: Vec<PathBuf>, output_file: PathBuf, gap_width: u32) -> Self {
        Arguments {
            input_files,
            output_file,
            gap_width,
            number_of_threads: 1,
        }
    }

    pub fn with_threads(self, number_of_threads: usize) -> Self {
        Arguments {
            number_of_threads,
            ..self
        }
    }
}

/// Loads every input file, stacks the images and writes the result. The output
/// file is only touched once stacking succeeded.
pub fn stack_png_files(arguments: &Arguments) -> Result<()> {
    let images = read_png_files(&arguments.input_files, arguments.number_of_threads)?;
    let compositor = StackCompositor::new(arguments.gap_width);
    let canvas = compositor.compose(&images)?;
    drop(images);
    write_png_file(&arguments.output_file, &canvas)
}
