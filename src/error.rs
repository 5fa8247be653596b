// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the viewer can report.
///
/// Only [`Error::NoImagesFound`], [`Error::PathNotFound`] and [`Error::Font`] are
/// treated as fatal, and only before the event loop starts. Everything else is
/// logged where it happens and the viewer keeps running.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Cannot access path: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("No images found in the directory: {}", directory.display())]
    NoImagesFound { directory: PathBuf },

    /// Catalog lookup outside `[0, len)`. Indicates a caller bug.
    #[error("Index {index} is out of bounds for the image list (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to load image {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("Failed to load font {}: {message}", path.display())]
    Font { path: PathBuf, message: String },

    #[error("Failed to spawn command: {0}")]
    Spawn(String),

    #[error("Command line is full ({capacity} characters)")]
    CommandTooLong { capacity: usize },
}

impl Error {
    /// Whether this error must abort startup with a non-zero exit code.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::NoImagesFound { .. } | Error::PathNotFound { .. } | Error::Font { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
