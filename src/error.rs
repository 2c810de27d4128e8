use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating the preview and tile set.
///
/// The variants are deliberately coarse but tagged: tests and callers can
/// match on the failure kind (load vs. encode vs. filesystem) without
/// parsing the rendered message.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The source image could not be opened or decoded
    /// (missing file, corrupt data, unsupported format).
    #[error("failed to load source image {path}: {message}")]
    Load { path: PathBuf, message: String },

    /// Resizing, cropping, or encoding an output artifact failed.
    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Directory creation or file write failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    /// Build a load error. Covers missing files, corrupt data, and
    /// unsupported formats alike.
    pub fn load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Load {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Build an encode error from an `image` crate failure.
    ///
    /// Write failures surfaced through the encoder are unwrapped into the
    /// [`GeneratorError::Io`] kind so disk-full and permission errors keep
    /// their tag.
    pub fn encode(path: impl Into<PathBuf>, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => Self::Io {
                path: path.into(),
                source,
            },
            other => Self::Encode {
                path: path.into(),
                message: other.to_string(),
            },
        }
    }

    /// Build an I/O error with the path that was being touched.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
