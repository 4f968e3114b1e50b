use crate::{error::ConvError, utils::util::Result};
use flate2::read::MultiGzDecoder;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal, Read as ioRead},
    path::Path,
};

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".gzip") || path_str.ends_with(".bgz")
}

/// Opens a plain or gzip-compressed text file, choosing by extension.
pub fn open_text_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    let file = File::open(path)
        .map_err(|error| crate::conv_error!("Failed to open file {}: {error}", path.display()))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(ConvError::InvalidGzipHeader {
                path: path.to_path_buf(),
            })
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Opens `path`, or standard input when no path is given.
pub fn open_input_reader(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => Ok(Box::new(open_text_reader(path)?)),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// True when standard input is an interactive terminal rather than a pipe or file.
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}
