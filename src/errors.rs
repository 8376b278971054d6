use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a normalization run.
///
/// Skip conditions (missing file, non-PNG extension) are not errors; they are
/// reported through [`crate::Outcome`]. Every variant here carries the path and
/// the step that failed so the message is useful without a backtrace.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Filesystem error: {operation} failed for {path:?}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Image processing error: {operation} failed (file: {path:?})")]
    ImageProcessing {
        path: PathBuf,
        operation: String,
        #[source]
        source: image::ImageError,
    },
}

impl NormalizeError {
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    pub fn image_processing(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: image::ImageError,
    ) -> Self {
        Self::ImageProcessing {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Path the failing operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileSystem { path, .. } | Self::ImageProcessing { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
