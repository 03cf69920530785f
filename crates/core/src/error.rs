// crates/core/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Why a file could not be loaded as text.
///
/// The `Display` text is the user-facing message without an `Error: ` prefix.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File '{}' not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("Cannot decode '{}' as UTF-8.", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Permission denied reading '{}'.", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Cannot read '{}': {source}.", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
