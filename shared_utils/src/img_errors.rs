//! Conversion Error Types
//!
//! One variant per failure point of a WebP migration run. Only
//! `DirectoryAccess` is fatal; the rest are scoped to a single file.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Cannot read directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode WebP for {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete original {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Taxonomy name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::DirectoryAccess { .. } => "DirectoryAccessError",
            ConvertError::Decode { .. } => "DecodeError",
            ConvertError::Encode { .. } => "EncodeError",
            ConvertError::Write { .. } => "WriteError",
            ConvertError::Delete { .. } => "DeleteError",
        }
    }

    /// Fatal errors abort the whole run; everything else only skips one file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConvertError::DirectoryAccess { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            ConvertError::DirectoryAccess { path, .. }
            | ConvertError::Decode { path, .. }
            | ConvertError::Encode { path, .. }
            | ConvertError::Write { path, .. }
            | ConvertError::Delete { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
