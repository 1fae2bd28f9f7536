//! CSV serialization of roster rows.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use roster_model::{ColumnId, Record};

use crate::error::{OutputError, Result};

/// Prefix of exported file names.
pub const EXPORT_FILE_STEM: &str = "students";

/// Stream rows to a writer.
///
/// The header row carries column labels. Rows are written in the order given;
/// the selection marker column is skipped. Fields containing a comma, quote or
/// line break are quoted with doubled inner quotes.
pub fn write_csv<'a, W, I>(writer: W, rows: I, columns: &[ColumnId]) -> Result<W>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let columns: Vec<ColumnId> = columns
        .iter()
        .copied()
        .filter(ColumnId::is_data)
        .collect();

    let mut csv = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv.write_record(columns.iter().map(ColumnId::label))?;
    let mut count = 0usize;
    for record in rows {
        csv.write_record(columns.iter().map(|column| record.display(*column)))?;
        count += 1;
    }

    tracing::debug!(rows = count, columns = columns.len(), "encoded CSV");
    csv.into_inner()
        .map_err(|error| OutputError::Csv(csv::Error::from(error.into_error())))
}

/// Render rows to a CSV string.
pub fn to_csv<'a, I>(rows: I, columns: &[ColumnId]) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let bytes = write_csv(Vec::new(), rows, columns)?;
    Ok(String::from_utf8(bytes)?)
}

/// Date-stamped export file name, e.g. `students-2024-05-01.csv`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_STEM}-{}.csv", date.format("%Y-%m-%d"))
}

/// Write an export file into `dir` and return its path.
///
/// Uses atomic write (temp file + rename) so a failed export never leaves a
/// truncated file behind.
pub fn write_csv_file<'a, I>(
    dir: &Path,
    rows: I,
    columns: &[ColumnId],
    date: NaiveDate,
) -> Result<PathBuf>
where
    I: IntoIterator<Item = &'a Record>,
{
    let contents = to_csv(rows, columns)?;

    fs::create_dir_all(dir).map_err(|e| OutputError::Io {
        operation: "create directory",
        path: dir.to_path_buf(),
        source: e,
    })?;

    let path = dir.join(export_file_name(date));
    let temp_path = path.with_extension("csv.tmp");

    let mut file = File::create(&temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(contents.as_bytes())
        .map_err(|e| OutputError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, &path).map_err(|e| OutputError::Io {
        operation: "rename",
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "exported CSV");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "students-2024-03-09.csv");
    }

    #[test]
    fn test_empty_rows_still_write_header() {
        let csv = to_csv(std::iter::empty(), &[ColumnId::Select, ColumnId::Id, ColumnId::Name])
            .unwrap();
        assert_eq!(csv, "ID,Name\n");
    }
}
