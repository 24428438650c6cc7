use crate::error::ExportError;
use crate::models::{ExportFormat, RecordCollection};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write `records` into `dir` as [`ExportFormat::file_name`], replacing any
/// previous report. Returns the path written.
///
/// An empty collection is refused before any file is created. A write that
/// fails partway leaves whatever was written in place.
pub fn export(records: &RecordCollection, format: ExportFormat, dir: &Path) -> Result<PathBuf, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyCollection);
    }

    let path = dir.join(format.file_name());
    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };
    let file = File::create(&path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => write_csv(records, &mut writer)?,
        ExportFormat::Json => write_json(records, &mut writer)?,
    }
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), records = records.len(), format = %format, "exported metadata");
    Ok(path)
}

/// Header row plus one row per record. Fields are quoted only when needed.
pub fn write_csv<W: Write>(records: &RecordCollection, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in records.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// A JSON array of objects keyed by the report column names, indented by four spaces.
pub fn write_json<W: Write>(records: &RecordCollection, writer: W) -> Result<(), ExportError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    records.rows().serialize(&mut ser)?;
    Ok(())
}
