//! Comparison of a computed digest against a user-supplied reference.
//!
//! The reference is compared byte for byte. `ABC…` and `abc…` do not match,
//! and surrounding whitespace is significant.

use crate::file_ops;
use crate::models::{DigestAlgorithm, IntegrityStatus};
use std::path::Path;

/// An absent digest reports `Unavailable` whether or not a reference was given.
pub fn check_integrity(computed: Option<&str>, reference: &str) -> IntegrityStatus {
    match computed {
        None => IntegrityStatus::Unavailable,
        Some(_) if reference.is_empty() => IntegrityStatus::NotChecked,
        Some(digest) if digest == reference => IntegrityStatus::Match,
        Some(_) => IntegrityStatus::Mismatch,
    }
}

/// Hash `path` and compare it to `reference` in one step.
pub fn verify_file(path: &Path, reference: &str, algo: DigestAlgorithm) -> IntegrityStatus {
    let computed = match file_ops::compute_file_hash(path, algo) {
        Ok(hex) => Some(hex),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "hash unavailable");
            None
        }
    };
    check_integrity(computed.as_deref(), reference)
}
