use crate::error::{ExportError, HashError};
use crate::utils;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
}

impl DigestAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
        }
    }

    /// Length of the lowercase hex digest this algorithm produces.
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 64,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = HashError;

    /// Accepts `sha256`, `SHA-256`, `sha_256` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "sha256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(HashError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityStatus {
    Match,
    Mismatch,
    NotChecked,
    Unavailable,
}

impl IntegrityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrityStatus::Match => "Match",
            IntegrityStatus::Mismatch => "Mismatch",
            IntegrityStatus::NotChecked => "NotChecked",
            IntegrityStatus::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for IntegrityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn all() -> Vec<ExportFormat> {
        vec![ExportFormat::Csv, ExportFormat::Json]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "metadata_report.csv",
            ExportFormat::Json => "metadata_report.json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Everything known about one file after an extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    pub file_name: String,
    pub file_path: PathBuf,
    pub file_extension: String,
    pub file_size_bytes: u64,
    pub file_size_display: String,
    pub created_at: Option<DateTime<Local>>,
    pub modified_at: Option<DateTime<Local>>,
    pub accessed_at: Option<DateTime<Local>>,
    pub content_hash: Option<String>,
    pub integrity_status: IntegrityStatus,
}

impl MetadataRecord {
    /// The string form shared by the text panel and both export formats.
    pub fn to_row(&self) -> ReportRow {
        ReportRow {
            file_name: self.file_name.clone(),
            file_path: self.file_path.display().to_string(),
            file_extension: self.file_extension.clone(),
            file_size: self.file_size_display.clone(),
            creation_time: utils::format_timestamp(self.created_at.as_ref()),
            modified_time: utils::format_timestamp(self.modified_at.as_ref()),
            access_time: utils::format_timestamp(self.accessed_at.as_ref()),
            sha256_hash: self.content_hash.clone().unwrap_or_default(),
            integrity_status: self.integrity_status.as_str().to_string(),
        }
    }
}

pub const FIELD_NAMES: [&str; 9] = [
    "File Name",
    "File Path",
    "File Extension",
    "File Size",
    "Creation Time",
    "Last Modified Time",
    "Last Access Time",
    "SHA256 Hash",
    "Integrity Check Status",
];

/// A record flattened to the nine report columns, in [`FIELD_NAMES`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "File Name")]
    pub file_name: String,
    #[serde(rename = "File Path")]
    pub file_path: String,
    #[serde(rename = "File Extension")]
    pub file_extension: String,
    #[serde(rename = "File Size")]
    pub file_size: String,
    #[serde(rename = "Creation Time")]
    pub creation_time: String,
    #[serde(rename = "Last Modified Time")]
    pub modified_time: String,
    #[serde(rename = "Last Access Time")]
    pub access_time: String,
    #[serde(rename = "SHA256 Hash")]
    pub sha256_hash: String,
    #[serde(rename = "Integrity Check Status")]
    pub integrity_status: String,
}

impl ReportRow {
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            (FIELD_NAMES[0], self.file_name.as_str()),
            (FIELD_NAMES[1], self.file_path.as_str()),
            (FIELD_NAMES[2], self.file_extension.as_str()),
            (FIELD_NAMES[3], self.file_size.as_str()),
            (FIELD_NAMES[4], self.creation_time.as_str()),
            (FIELD_NAMES[5], self.modified_time.as_str()),
            (FIELD_NAMES[6], self.access_time.as_str()),
            (FIELD_NAMES[7], self.sha256_hash.as_str()),
            (FIELD_NAMES[8], self.integrity_status.as_str()),
        ]
    }
}

/// Records from one extraction run, in input order.
///
/// A new run produces a new collection; nothing is ever appended to an
/// existing one from outside the collector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordCollection {
    records: Vec<MetadataRecord>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MetadataRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[MetadataRecord] {
        &self.records
    }

    pub fn rows(&self) -> Vec<ReportRow> {
        self.records.iter().map(MetadataRecord::to_row).collect()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a MetadataRecord;
    type IntoIter = std::slice::Iter<'a, MetadataRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<MetadataRecord> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = MetadataRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
