use crate::error::HashError;
use crate::hashers::{self, CHUNK_SIZE};
use crate::models::DigestAlgorithm;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Compute hash of the file at path using streaming read.
/// This is synchronous; call it inside a spawned thread/task to keep UI responsive.
pub fn compute_file_hash(path: &Path, algo: DigestAlgorithm) -> Result<String, HashError> {
    let read_err = |source| HashError::Read {
        path: path.to_path_buf(),
        source,
    };
    let f = File::open(path).map_err(read_err)?;
    let reader = BufReader::with_capacity(CHUNK_SIZE, f);
    hashers::compute_hash_for_reader(reader, algo).map_err(read_err)
}

/// Filesystem fields of one file. Timestamps the platform cannot report are `None`.
#[derive(Debug, Clone)]
pub struct FileStat {
    pub size: u64,
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
    pub accessed: Option<DateTime<Local>>,
}

pub fn stat_file(path: &Path) -> io::Result<FileStat> {
    let meta = fs::metadata(path)?;
    Ok(FileStat {
        size: meta.len(),
        created: meta.created().ok().map(DateTime::<Local>::from),
        modified: meta.modified().ok().map(DateTime::<Local>::from),
        accessed: meta.accessed().ok().map(DateTime::<Local>::from),
    })
}

/// Extension with its leading dot, or empty. Dotfiles such as `.bashrc` have none.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
