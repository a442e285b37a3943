// Auto Pulse - core/export.rs
//
// Plain-text, CSV, and JSON export of a generated pulse.
// Core layer: writes to any Write trait object.

use crate::core::model::TaskEntry;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Row shape shared by the CSV and JSON exports.
#[derive(serde::Serialize)]
struct ExportRecord<'a> {
    task: &'a str,
    occurrences: u32,
    duration_hours: f64,
}

impl<'a> ExportRecord<'a> {
    fn from_entry(entry: &'a TaskEntry) -> Self {
        Self {
            task: &entry.label,
            occurrences: entry.occurrences,
            duration_hours: entry.duration_hours(),
        }
    }
}

/// Write the rendered pulse text as-is. Returns the number of bytes written.
pub fn export_text<W: Write>(
    report: &str,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    writer
        .write_all(report.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| ExportError::Io {
            path: export_path.to_path_buf(),
            source: e,
        })?;
    Ok(report.len())
}

/// Export the tally to CSV. Returns the number of task rows written.
///
/// Columns: task, occurrences, duration_hours
pub fn export_csv<W: Write>(
    entries: &[TaskEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in entries {
        // serde-based serialisation emits the header row automatically.
        csv_writer
            .serialize(ExportRecord::from_entry(entry))
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(entries.len())
}

/// Export the tally to JSON (pretty-printed array of records).
pub fn export_json<W: Write>(
    entries: &[TaskEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let records: Vec<ExportRecord<'_>> = entries.iter().map(ExportRecord::from_entry).collect();
    serde_json::to_writer_pretty(writer, &records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}
