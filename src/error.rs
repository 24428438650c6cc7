//! Error types for hashing, extraction and export.
//!
//! Per-path failures ([`HashError`], [`ExtractError`]) are recovered inside the
//! collector and never abort a run. Only [`ExportError`] is surfaced to the
//! caller as a hard stop.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// A path that was skipped during extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File {} does not exist.", .0.display())]
    PathNotFound(PathBuf),

    #[error("An error occurred with {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ExtractError::PathNotFound(path) => path,
            ExtractError::Metadata { path, .. } => path,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No metadata to export.")]
    EmptyCollection,

    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
