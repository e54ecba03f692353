//! CLI subcommand implementations.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::aggregate;
use crate::entry::{EntryId, EntryKind, NewEntry};
use crate::filespec::{self, FileSpec};
use crate::format;
use crate::report;
use crate::store::{EntryStore, Snapshot};

#[derive(Debug, Args)]
pub struct Add {
    /// Short description of the entry, e.g. "Salary" or "Rent".
    title: String,
    /// Positive amount, e.g. "1234.56".
    amount: Decimal,
    /// Either "income" or "expense".
    kind: EntryKind,
    /// Calendar date of the entry ("YYYY-MM-DD"); defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl Add {
    pub fn run(&self, store: &mut dyn EntryStore) -> Result<()> {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let draft = NewEntry::new(&self.title, self.amount, self.kind, date)?;
        let (entry, snapshot) = store.create(draft)?;
        println!(
            "added {} {} ({})",
            entry.kind,
            format::currency(entry.amount),
            entry.id
        );
        print_balance(&snapshot);
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct List {}

impl List {
    pub fn run(&self, store: &mut dyn EntryStore) -> Result<()> {
        let snapshot = store.fetch_all()?;
        warn_on_skipped(&snapshot);
        if snapshot.entries.is_empty() {
            println!("No entries recorded yet.");
            return Ok(());
        }
        for entry in &snapshot.entries {
            println!(
                "{}  {}  {:>12}  {:<7}  {}",
                entry.id,
                format::date(entry.date),
                format::amount(entry.amount),
                entry.kind.as_str(),
                entry.title
            );
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct Remove {
    /// Id of the entry to delete, as shown by `list`.
    id: EntryId,
}

impl Remove {
    pub fn run(&self, store: &mut dyn EntryStore) -> Result<()> {
        let snapshot = store.delete(&self.id)?;
        println!("deleted {}", self.id);
        print_balance(&snapshot);
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct Summary {}

impl Summary {
    pub fn run(&self, store: &mut dyn EntryStore) -> Result<()> {
        let snapshot = store.fetch_all()?;
        warn_on_skipped(&snapshot);
        let summary = aggregate::summarize(&snapshot.entries);
        println!("Total income:   {}", format::currency(summary.total_income));
        println!(
            "Total expenses: {}",
            format::currency(summary.total_expense)
        );
        println!("Balance:        {}", format::currency(summary.balance()));
        if summary.monthly.is_empty() {
            return Ok(());
        }
        println!();
        println!("{:<8} {:>14} {:>14}", "Month", "Income", "Expenses");
        for bucket in &summary.monthly {
            println!(
                "{:<8} {:>14} {:>14}",
                bucket.month.label(),
                format::amount(bucket.income),
                format::amount(bucket.expense)
            );
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ExportCsv {
    /// Where to write the report; "-" writes to stdout. Defaults to
    /// "expenses_<date>.csv" in the working directory.
    #[arg(short = 'o', long = "output")]
    output: Option<FileSpec>,
}

impl ExportCsv {
    pub fn run(&self, store: &mut dyn EntryStore) -> Result<()> {
        let snapshot = store.fetch_all()?;
        warn_on_skipped(&snapshot);
        let today = Local::now().date_naive();
        // Render fully before opening the destination, so an empty
        // dataset never leaves a file behind.
        let mut rendered = Vec::new();
        report::csv::write(&snapshot.entries, &mut rendered)?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| FileSpec::Path(report::csv_file_name(today).into()));
        filespec::write_bytes(&output, &rendered)?;
        info!(entries = snapshot.entries.len(), %output, "delimited report written");
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ExportPdf {
    /// Where to write the report; "-" writes to stdout. Defaults to
    /// "expense_report_<date>.pdf" in the working directory.
    #[arg(short = 'o', long = "output")]
    output: Option<FileSpec>,
}

impl ExportPdf {
    pub fn run(&self, store: &mut dyn EntryStore) -> Result<()> {
        let snapshot = store.fetch_all()?;
        warn_on_skipped(&snapshot);
        let today = Local::now().date_naive();
        let mut rendered = Vec::new();
        report::pdf::write(&snapshot.entries, today, &mut rendered)?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| FileSpec::Path(report::pdf_file_name(today).into()));
        filespec::write_bytes(&output, &rendered)?;
        info!(entries = snapshot.entries.len(), %output, "document report written");
        Ok(())
    }
}

fn print_balance(snapshot: &Snapshot) {
    let summary = aggregate::summarize(&snapshot.entries);
    println!("balance: {}", format::currency(summary.balance()));
}

fn warn_on_skipped(snapshot: &Snapshot) {
    if snapshot.skipped > 0 {
        warn!(
            skipped = snapshot.skipped,
            "stored records could not be decoded and were left out"
        );
    }
}
