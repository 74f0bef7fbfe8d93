use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    AllocationFailed {
        width: u32,
        height: u32,
    },
    MismatchOfSizeBetweenDimensionsAndBuffer {
        expected: usize,
        actual: usize,
    },
    IndexOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    RowOutOfRange {
        y: u32,
        height: u32,
    },
    RegionOutOfBounds {
        x: u32,
        y: u32,
        region_width: u32,
        region_height: u32,
        width: u32,
        height: u32,
    },
    NoInputImages,
    UnableToOpenInputFileForReading(String, std::io::Error),
    NotAPngFile(String),
    FailedToDecodeImage(String, image::ImageError),
    ImageHasNoPixels(String),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToEncodeImage(String, image::ImageError),
    FailedToFlushOutput(String, std::io::Error),
    ThreadPoolJobLost(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllocationFailed { width, height } => {
                write!(
                    f,
                    "Unable to allocate an image buffer of {}x{} pixels",
                    width, height
                )
            }
            Self::MismatchOfSizeBetweenDimensionsAndBuffer { expected, actual } => {
                write!(
                    f,
                    "Image buffer holds {} bytes, but its dimensions require {}",
                    actual, expected
                )
            }
            Self::IndexOutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({}, {}) is outside of the {}x{} image",
                    x, y, width, height
                )
            }
            Self::RowOutOfRange { y, height } => {
                write!(f, "Row {} is outside of an image of height {}", y, height)
            }
            Self::RegionOutOfBounds {
                x,
                y,
                region_width,
                region_height,
                width,
                height,
            } => {
                write!(
                    f,
                    "Region of {}x{} pixels at ({}, {}) does not fit into the {}x{} image",
                    region_width, region_height, x, y, width, height
                )
            }
            Self::NoInputImages => write!(f, "No input images were provided"),
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::NotAPngFile(path) => write!(f, "File '{}' is not a png file", path),
            Self::FailedToDecodeImage(path, error) => {
                write!(f, "Failed to decode image '{}': {}", path, error)
            }
            Self::ImageHasNoPixels(path) => {
                write!(f, "Image '{}' has a width or height of zero", path)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToEncodeImage(path, error) => {
                write!(f, "Failed to encode image '{}': {}", path, error)
            }
            Self::FailedToFlushOutput(path, error) => {
                write!(f, "Failed to flush output file '{}': {}", path, error)
            }
            Self::ThreadPoolJobLost(index) => {
                write!(f, "Decoding job for input file #{} did not report back", index)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToFlushOutput(_, error) => Some(error),
            Self::FailedToDecodeImage(_, error) | Self::FailedToEncodeImage(_, error) => {
                Some(error)
            }
            _ => None,
        }
    }
}
