//! File metadata extraction with streaming SHA-256 hashing, optional
//! integrity comparison against a known digest, and CSV/JSON reports.
//!
//! The core is synchronous: [`collector::extract_metadata`] walks the given
//! paths in order and returns a fresh [`models::RecordCollection`], which
//! [`export::export`] writes out on demand.

pub mod collector;
pub mod display;
pub mod error;
pub mod export;
pub mod file_ops;
pub mod hashers;
pub mod integrity;
pub mod logging;
pub mod models;
pub mod session;
pub mod utils;

pub use collector::{extract_metadata, Extraction};
pub use error::{ExportError, ExtractError, HashError};
pub use models::{
    DigestAlgorithm, ExportFormat, IntegrityStatus, MetadataRecord, RecordCollection, ReportRow,
};
pub use session::Session;
