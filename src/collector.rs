//! Builds one [`MetadataRecord`] per existing input path.
//!
//! Paths are processed one at a time in the order given. A missing path is
//! skipped and reported; a file that exists but cannot be read still yields a
//! record, with no hash and `Unavailable` integrity.

use crate::error::ExtractError;
use crate::file_ops;
use crate::integrity;
use crate::models::{DigestAlgorithm, MetadataRecord, RecordCollection};
use crate::utils;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of one extraction run.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: RecordCollection,
    /// One entry per skipped path, in input order.
    pub notices: Vec<ExtractError>,
}

pub fn extract_metadata<P: AsRef<Path>>(
    paths: &[P],
    known_hash: Option<&str>,
    algo: DigestAlgorithm,
) -> Extraction {
    let reference = known_hash.unwrap_or("");
    info!(count = paths.len(), checking = !reference.is_empty(), "extracting metadata");

    let mut out = Extraction::default();
    for path in paths {
        match collect_record(path.as_ref(), reference, algo) {
            Ok(record) => out.records.push(record),
            Err(notice) => {
                debug!(path = %notice.path().display(), "skipped");
                out.notices.push(notice);
            }
        }
    }

    info!(
        records = out.records.len(),
        skipped = out.notices.len(),
        "extraction finished"
    );
    out
}

pub fn collect_record(
    path: &Path,
    reference: &str,
    algo: DigestAlgorithm,
) -> Result<MetadataRecord, ExtractError> {
    let stat = file_ops::stat_file(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ExtractError::PathNotFound(path.to_path_buf())
        } else {
            ExtractError::Metadata {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let content_hash = match file_ops::compute_file_hash(path, algo) {
        Ok(hex) => Some(hex),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "content hash unavailable");
            None
        }
    };
    let integrity_status = integrity::check_integrity(content_hash.as_deref(), reference);
    debug!(path = %path.display(), size = stat.size, status = %integrity_status, "collected");

    Ok(MetadataRecord {
        file_name: file_ops::file_name(path),
        file_path: path.to_path_buf(),
        file_extension: file_ops::file_extension(path),
        file_size_bytes: stat.size,
        file_size_display: utils::format_size(stat.size),
        created_at: stat.created,
        modified_at: stat.modified,
        accessed_at: stat.accessed,
        content_hash,
        integrity_status,
    })
}
