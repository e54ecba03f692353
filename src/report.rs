//! Exportable reports rendered from entry snapshots.
//!
//! Both formats are pure renderings of one snapshot: a header plus one
//! row per entry, in snapshot order, with amounts fixed to two decimal
//! places. Rendering an empty snapshot is a user-facing failure and
//! produces no bytes.

use chrono::NaiveDate;
use thiserror::Error;

use crate::entry::Entry;
use crate::format;

pub mod csv;
pub mod pdf;

/// Column headers shared by both report formats.
const COLUMNS: [&str; 4] = ["Title", "Amount", "Type", "Date"];

#[derive(Debug, Error)]
pub enum ReportError {
    /// Nothing to export; callers must not produce a file.
    #[error("no entries to export")]
    EmptyDataset,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to write delimited report: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("failed to render document report: {0}")]
    Pdf(String),
}

fn ensure_not_empty(entries: &[Entry]) -> Result<(), ReportError> {
    if entries.is_empty() {
        return Err(ReportError::EmptyDataset);
    }
    Ok(())
}

/// One rendered table row, in column order.
fn row(entry: &Entry) -> [String; 4] {
    [
        entry.title.clone(),
        format::amount(entry.amount),
        entry.kind.to_string(),
        format::date(entry.date),
    ]
}

/// Conventional file name for a delimited export generated on `date`.
pub fn csv_file_name(date: NaiveDate) -> String {
    format!("expenses_{}.csv", format::date(date))
}

/// Conventional file name for a document export generated on `date`.
pub fn pdf_file_name(date: NaiveDate) -> String {
    format!("expense_report_{}.pdf", format::date(date))
}
