// crates/core/src/reader.rs
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LoadError, Result};
use crate::stats::Report;

/// Read the whole file at `path` and decode it as UTF-8.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`], [`LoadError::PermissionDenied`] or
/// [`LoadError::Io`] if the file cannot be read, and [`LoadError::Decode`]
/// if its bytes are not valid UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    let bytes = {
        let mut file = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| LoadError::from_io(path, e))?;
        buf
    };
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    let text = String::from_utf8(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_newlines(text))
}

/// Turn `\r\n` and lone `\r` into `\n`, as text-mode reads do.
fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

/// Load `path` and count it.
///
/// # Errors
///
/// Any error from [`read_file`].
pub fn analyze_file(path: &Path) -> Result<Report> {
    let text = read_file(path)?;
    Ok(crate::counter::analyze(&text))
}
