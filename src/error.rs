//! Error types for the filters and for file I/O.
use std::path::PathBuf;
use thiserror::Error;

/// Argument errors raised before any pixel is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid argument: kernel size must be a positive odd integer, got {k}")]
    InvalidKernelSize { k: usize },

    #[error("invalid argument: image is empty ({width}x{height})")]
    EmptyInput { width: usize, height: usize },

    #[error("invalid argument: buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

impl FilterError {
    /// Every variant is a caller mistake; nothing here is transient.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidKernelSize { .. } | Self::EmptyInput { .. } | Self::BufferSize { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to create image buffer for {}", .path.display())]
    Buffer { path: PathBuf },

    #[error("Failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize JSON for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Filter(#[from] FilterError),
}
