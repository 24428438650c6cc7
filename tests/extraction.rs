use filemeta::models::FIELD_NAMES;
use filemeta::{
    extract_metadata, DigestAlgorithm, ExportError, ExportFormat, ExtractError, IntegrityStatus, ReportRow, Session,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    fs::write(&a, b"hello").unwrap();
    let missing = dir.path().join("missing.txt");
    (dir, a, missing)
}

#[test]
fn hello_without_reference() {
    let (_dir, a, missing) = workspace();
    let out = extract_metadata(&[&a, &missing], None, DigestAlgorithm::Sha256);

    assert_eq!(out.records.len(), 1);
    let record = &out.records.as_slice()[0];
    assert_eq!(record.file_name, "a.txt");
    assert_eq!(record.file_path, a);
    assert_eq!(record.file_extension, ".txt");
    assert_eq!(record.file_size_bytes, 5);
    assert_eq!(record.file_size_display, "5.00 B");
    assert_eq!(record.content_hash.as_deref(), Some(HELLO_SHA256));
    assert_eq!(record.integrity_status, IntegrityStatus::NotChecked);

    assert_eq!(out.notices.len(), 1);
    assert!(matches!(&out.notices[0], ExtractError::PathNotFound(p) if p == &missing));
    assert_eq!(out.notices[0].to_string(), format!("File {} does not exist.", missing.display()));
}

#[test]
fn hello_with_matching_and_mismatching_reference() {
    let (_dir, a, _) = workspace();

    let matched = extract_metadata(&[&a], Some(HELLO_SHA256), DigestAlgorithm::Sha256);
    assert_eq!(matched.records.as_slice()[0].integrity_status, IntegrityStatus::Match);

    let other = "f".repeat(64);
    let mismatched = extract_metadata(&[&a], Some(&other), DigestAlgorithm::Sha256);
    assert_eq!(mismatched.records.as_slice()[0].integrity_status, IntegrityStatus::Mismatch);

    let upper = HELLO_SHA256.to_uppercase();
    let case_differs = extract_metadata(&[&a], Some(&upper), DigestAlgorithm::Sha256);
    assert_eq!(case_differs.records.as_slice()[0].integrity_status, IntegrityStatus::Mismatch);
}

#[test]
fn empty_reference_means_not_checked() {
    let (_dir, a, _) = workspace();
    let out = extract_metadata(&[&a], Some(""), DigestAlgorithm::Sha256);
    assert_eq!(out.records.as_slice()[0].integrity_status, IntegrityStatus::NotChecked);
}

#[test]
fn n_paths_with_m_missing() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    for i in 0..5 {
        let p = dir.path().join(format!("f{i}.dat"));
        fs::write(&p, vec![i as u8; i * 1000]).unwrap();
        paths.push(p);
    }
    for i in 0..3 {
        paths.insert(i * 2, dir.path().join(format!("gone{i}")));
    }

    let out = extract_metadata(&paths, None, DigestAlgorithm::Sha256);
    assert_eq!(out.records.len(), 5);
    assert_eq!(out.notices.len(), 3);

    let mut missing: Vec<_> = out.notices.iter().map(|n| n.path().to_path_buf()).collect();
    missing.sort();
    missing.dedup();
    assert_eq!(missing.len(), 3);
}

#[test]
fn json_export_round_trips_formatted_rows() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    for (name, body) in [("one.txt", "1"), ("two.csv", "a,b\n"), ("three", "")] {
        let p = dir.path().join(name);
        fs::write(&p, body).unwrap();
        paths.push(p);
    }

    let mut session = Session::new(DigestAlgorithm::Sha256);
    assert!(session.extract(&paths, None).is_empty());
    let written = session.export(ExportFormat::Json, dir.path()).unwrap();
    assert_eq!(written.file_name().unwrap(), "metadata_report.json");

    let text = fs::read_to_string(&written).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        let keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), FIELD_NAMES.len());
        assert!(FIELD_NAMES.iter().all(|k| keys.contains(k)));
    }

    let parsed: Vec<ReportRow> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, session.records().rows());
    assert_eq!(parsed[2].file_extension, "");
}

#[test]
fn csv_export_parses_back() {
    let (dir, a, _) = workspace();
    let mut session = Session::default();
    session.extract(&[&a], Some(HELLO_SHA256));
    let written = session.export(ExportFormat::Csv, dir.path()).unwrap();

    let mut rdr = csv::Reader::from_path(&written).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(headers, FIELD_NAMES);

    let rows: Vec<ReportRow> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sha256_hash, HELLO_SHA256);
    assert_eq!(rows[0].integrity_status, "Match");
    assert_eq!(rows[0].file_size, "5.00 B");
}

#[test]
fn export_before_any_extraction_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let session = Session::default();
    let err = session.export(ExportFormat::Csv, dir.path()).unwrap_err();
    assert!(matches!(err, ExportError::EmptyCollection));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
