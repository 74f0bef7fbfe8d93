use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::mpsc,
};

use threadpool::ThreadPool;

use super::{Image, ImageReader};
use crate::{error::Error, Result};

pub mod png;

use self::png::PngImageReader;

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn open_input_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| Error::UnableToOpenInputFileForReading(display_path(path), e))
}

pub fn read_png_file(path: &Path) -> Result<Image> {
    let file = open_input_file(path)?;
    let mut reader = PngImageReader::new(BufReader::new(file), display_path(path));
    let image = reader.read_image()?;
    log::info!(
        "Loaded '{}' ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Loads all files in order. With more than one thread the files are decoded
/// on a thread pool, the result keeps the order of `paths` either way and the
/// first failing path in that order is reported.
pub fn read_png_files(paths: &[PathBuf], number_of_threads: usize) -> Result<Vec<Image>> {
    if number_of_threads <= 1 || paths.len() <= 1 {
        return paths.iter().map(|path| read_png_file(path)).collect();
    }
    read_png_files_in_parallel(paths, number_of_threads)
}

fn read_png_files_in_parallel(paths: &[PathBuf], number_of_threads: usize) -> Result<Vec<Image>> {
    let threadpool = ThreadPool::new(number_of_threads.min(paths.len()));
    let (sender, receiver) = mpsc::channel();
    for (index, path) in paths.iter().enumerate() {
        let sender = sender.clone();
        let path = path.clone();
        threadpool.execute(move || {
            // receiver only disappears once the caller gave up
            let _ = sender.send((index, read_png_file(&path)));
        });
    }
    drop(sender);

    let mut slots: Vec<Option<Result<Image>>> = paths.iter().map(|_| None).collect();
    for (index, result) in receiver.iter() {
        slots[index] = Some(result);
    }
    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.unwrap_or_else(|| Err(Error::ThreadPoolJobLost(index))))
        .collect()
}
