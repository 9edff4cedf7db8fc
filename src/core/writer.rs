use crate::domain::model::ItemRecord;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::Path;

/// Creates or truncates `path` and writes the header row followed by one row
/// per record. The file handle is owned by the csv writer and closed when it
/// drops, whichever way this returns.
///
/// Every row, the header included, ends in a bare `\n` rather than the
/// `\r\n` of RFC 4180. Fields are quoted only when they contain a comma,
/// quote or line break.
///
/// `columns` is checked before the file is touched, so a bad header never
/// truncates an existing output.
pub fn write_records(path: &Path, columns: &[String], records: &[ItemRecord]) -> Result<usize> {
    validation::validate_column_names("load.columns", columns)?;

    let display_path = path.display().to_string();
    let wrap = |source: csv::Error| ScrapeError::WriteError {
        path: display_path.clone(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(wrap)?;

    writer.write_record(columns).map_err(wrap)?;
    for record in records {
        writer.serialize(record).map_err(wrap)?;
    }
    writer.flush().map_err(|e| wrap(e.into()))?;

    tracing::debug!("Wrote {} rows to {}", records.len(), display_path);
    Ok(records.len())
}
