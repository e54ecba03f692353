//! Delimited report output for spreadsheet import.

use std::io::Write;

use crate::entry::Entry;

use super::{ensure_not_empty, ReportError, COLUMNS};

/// Writes the delimited report for `entries` to `out`.
///
/// A header row, then one record per entry in snapshot order. Titles
/// containing the delimiter or quotes are quoted by the writer.
pub fn write(entries: &[Entry], out: impl Write) -> Result<(), ReportError> {
    ensure_not_empty(entries)?;
    let mut writer = ::csv::Writer::from_writer(out);
    writer.write_record(COLUMNS)?;
    for entry in entries {
        writer.write_record(super::row(entry))?;
    }
    writer.flush()?;
    Ok(())
}
