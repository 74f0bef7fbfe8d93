use std::{
    fs::{File, OpenOptions},
    io::BufWriter,
    path::Path,
};

use super::{Image, ImageWriter};
use crate::{error::Error, Result};

pub mod png;

use self::png::PngImageWriter;

fn open_output_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(path.to_string_lossy().into_owned(), e)
        })
}

pub fn write_png_file(path: &Path, image: &Image) -> Result<()> {
    let output_file = open_output_file(path)?;
    let mut writer = PngImageWriter::new(
        BufWriter::new(output_file),
        image,
        path.to_string_lossy(),
    );
    writer.write_image()?;
    log::info!(
        "Wrote '{}' ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::write_png_file;
    use crate::{error::Error, image::Image};

    #[test]
    fn unwritable_output_file() {
        let image = Image::blank(1, 1).unwrap();
        let result = write_png_file(Path::new("/this/directory/does/not/exist/out.png"), &image);
        assert!(matches!(
            result,
            Err(Error::UnableToOpenOutputFileForWriting(..))
        ));
    }
}
