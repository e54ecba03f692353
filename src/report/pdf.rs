//! Paginated tabular (PDF) report output.
//!
//! Renders a summary block followed by the entry table onto A4 pages,
//! repeating the table header whenever rows overflow onto a fresh page.
//! Uses the builtin Helvetica fonts, so no font files are needed at
//! runtime.

use std::io::{BufWriter, Write};

use chrono::NaiveDate;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::aggregate;
use crate::entry::Entry;
use crate::format;

use super::{ensure_not_empty, ReportError, COLUMNS};

// A4 geometry. All positions are millimetres measured from the top-left
// corner; `from_top` converts to the PDF's bottom-up coordinates.
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 14.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 20.0;

/// Column x positions of the entry table.
const COLUMN_X: [f64; 4] = [14.0, 90.0, 130.0, 165.0];

const TITLE_SIZE: f64 = 20.0;
const META_SIZE: f64 = 10.0;
const SUMMARY_SIZE: f64 = 12.0;
const TABLE_SIZE: f64 = 10.0;
const ROW_STEP: f64 = 8.0;

fn from_top(y: f64) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

/// Writes the document report for `entries` to `out`.
///
/// `generated_on` is stamped into the header; the caller supplies it so
/// rendering stays deterministic.
pub fn write(
    entries: &[Entry],
    generated_on: NaiveDate,
    out: impl Write,
) -> Result<(), ReportError> {
    ensure_not_empty(entries)?;
    let summary = aggregate::summarize(entries);

    let (doc, page, layer) = PdfDocument::new(
        "Expense Tracker Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "report",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;
    let mut layer = doc.get_page(page).get_layer(layer);

    layer.use_text(
        "Expense Tracker Report",
        TITLE_SIZE,
        Mm(MARGIN_LEFT),
        from_top(20.0),
        &bold,
    );
    layer.use_text(
        format!("Generated on {}", format::date(generated_on)),
        META_SIZE,
        Mm(MARGIN_LEFT),
        from_top(27.0),
        &regular,
    );
    layer.use_text(
        format!("Total Income: {}", format::currency(summary.total_income)),
        SUMMARY_SIZE,
        Mm(MARGIN_LEFT),
        from_top(40.0),
        &regular,
    );
    layer.use_text(
        format!(
            "Total Expenses: {}",
            format::currency(summary.total_expense)
        ),
        SUMMARY_SIZE,
        Mm(MARGIN_LEFT),
        from_top(47.0),
        &regular,
    );
    layer.use_text(
        format!("Balance: {}", format::currency(summary.balance())),
        SUMMARY_SIZE,
        Mm(MARGIN_LEFT),
        from_top(54.0),
        &regular,
    );

    let mut y = 65.0;
    header_row(&layer, y, &bold);
    y += ROW_STEP;
    for entry in entries {
        if y > PAGE_HEIGHT - MARGIN_BOTTOM {
            let (page, fresh) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
            layer = doc.get_page(page).get_layer(fresh);
            y = MARGIN_TOP;
            header_row(&layer, y, &bold);
            y += ROW_STEP;
        }
        let cells = [
            entry.title.clone(),
            format::currency(entry.amount),
            entry.kind.to_string(),
            format::date(entry.date),
        ];
        text_row(&layer, y, &cells, &regular);
        y += ROW_STEP;
    }

    let mut writer = BufWriter::new(out);
    doc.save(&mut writer).map_err(render_error)?;
    writer.flush()?;
    Ok(())
}

fn header_row(layer: &PdfLayerReference, y: f64, font: &IndirectFontRef) {
    for (x, cell) in COLUMN_X.iter().zip(COLUMNS) {
        layer.use_text(cell, TABLE_SIZE, Mm(*x), from_top(y), font);
    }
}

fn text_row(layer: &PdfLayerReference, y: f64, cells: &[String; 4], font: &IndirectFontRef) {
    for (x, cell) in COLUMN_X.iter().zip(cells) {
        layer.use_text(cell.as_str(), TABLE_SIZE, Mm(*x), from_top(y), font);
    }
}

fn render_error(err: impl std::fmt::Display) -> ReportError {
    ReportError::Pdf(err.to_string())
}
