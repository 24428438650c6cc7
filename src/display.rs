use crate::models::RecordCollection;
use std::fmt::Write;

pub const SEPARATOR_WIDTH: usize = 60;

/// Text panel rendering: nine `Key: Value` lines per record, each record
/// followed by a line of dashes.
pub fn render_report(records: &RecordCollection) -> String {
    let mut out = String::new();
    let separator = "-".repeat(SEPARATOR_WIDTH);
    for row in records.rows() {
        for (key, value) in row.fields() {
            let _ = writeln!(out, "{key}: {value}");
        }
        out.push_str(&separator);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IntegrityStatus, MetadataRecord};
    use std::path::PathBuf;

    #[test]
    fn renders_key_value_lines_and_separator() {
        let record = MetadataRecord {
            file_name: "a.txt".to_string(),
            file_path: PathBuf::from("a.txt"),
            file_extension: ".txt".to_string(),
            file_size_bytes: 5,
            file_size_display: "5.00 B".to_string(),
            created_at: None,
            modified_at: None,
            accessed_at: None,
            content_hash: Some("ab".to_string()),
            integrity_status: IntegrityStatus::NotChecked,
        };
        let records: RecordCollection = std::iter::once(record).collect();
        let text = render_report(&records);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "File Name: a.txt");
        assert_eq!(lines[3], "File Size: 5.00 B");
        assert_eq!(lines[8], "Integrity Check Status: NotChecked");
        assert_eq!(lines[9], "-".repeat(60));
    }

    #[test]
    fn empty_collection_renders_nothing() {
        assert_eq!(render_report(&RecordCollection::new()), "");
    }
}
