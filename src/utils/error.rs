//! Error types for the batch resizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Validation errors for the job parameters.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("{0}")]
    Path(PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Input folder errors.
#[derive(Error, Debug)]
pub enum PathError {
    /// Folder does not exist
    #[error("Folder '{}' not found!", .0.display())]
    NotFound(PathBuf),
    /// Path exists but is not a directory
    #[error("'{}' is not a folder", .0.display())]
    NotADirectory(PathBuf),
}

/// Main error type for the resizer.
///
/// Run-level failures are returned as this type. Per-file failures are
/// converted to their message and stored on the file's result instead.
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// Job or input validation failed
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Decoding, resizing or encoding failed
    #[error("{0}")]
    Processing(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),
}

/// Convenience result type for resizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

impl OptimizerError {
    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    /// Returns `true` when the error is about the input folder itself.
    pub fn is_input_folder_error(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::Path(_)))
    }
}

impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotADirectory(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to OptimizerError
impl From<io::Error> for OptimizerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Codec errors keep the library's own wording, which names the failing stage
impl From<image::ImageError> for OptimizerError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::IO(e.to_string()),
            image::ImageError::Unsupported(e) => Self::Format(e.to_string()),
            other => Self::Processing(other.to_string()),
        }
    }
}
