//! Owner of the current [`RecordCollection`].
//!
//! Each extraction replaces the held collection wholesale. Export reads it
//! through `&self`, so it cannot overlap with a run that needs `&mut self`.

use crate::collector::{self, Extraction};
use crate::display;
use crate::error::{ExportError, ExtractError};
use crate::export;
use crate::models::{DigestAlgorithm, ExportFormat, RecordCollection};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct Session {
    algorithm: DigestAlgorithm,
    records: RecordCollection,
}

impl Session {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self {
            algorithm,
            records: RecordCollection::new(),
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    /// Run the collector over `paths` and keep its records in place of the
    /// previous ones. Returns the skipped-path notices.
    pub fn extract<P: AsRef<Path>>(&mut self, paths: &[P], known_hash: Option<&str>) -> Vec<ExtractError> {
        let Extraction { records, notices } = collector::extract_metadata(paths, known_hash, self.algorithm);
        self.replace(records);
        notices
    }

    /// Install a collection produced elsewhere (e.g. on a worker task).
    /// Returns the one it replaces.
    pub fn replace(&mut self, records: RecordCollection) -> RecordCollection {
        std::mem::replace(&mut self.records, records)
    }

    pub fn render(&self) -> String {
        display::render_report(&self.records)
    }

    pub fn export(&self, format: ExportFormat, dir: &Path) -> Result<PathBuf, ExportError> {
        export::export(&self.records, format, dir)
    }
}
