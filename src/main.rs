use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod aggregate;
mod cmd;
mod entry;
mod filespec;
mod format;
mod report;
mod store;

#[cfg(test)]
mod testutil;

/// Records income and expense entries, summarizes them by calendar
/// month, and exports delimited and document reports.
#[derive(Debug, Parser)]
struct Command {
    /// Path of the JSON entry store.
    #[arg(long, default_value = "expenses.json")]
    store: PathBuf,
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Debug, Subcommand)]
enum SubCommand {
    /// Records a new entry.
    Add(cmd::Add),
    /// Lists recorded entries, newest first.
    List(cmd::List),
    /// Deletes an entry by id.
    Remove(cmd::Remove),
    /// Prints totals and the monthly income/expense series.
    Summary(cmd::Summary),
    /// Writes the delimited (CSV) report.
    ExportCsv(cmd::ExportCsv),
    /// Writes the tabular (PDF) report.
    ExportPdf(cmd::ExportPdf),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = Command::parse();
    let mut store = store::json_file::JsonFileStore::open(&cmd.store);
    use SubCommand::*;
    match &cmd.subcmd {
        Add(c) => c.run(&mut store),
        List(c) => c.run(&mut store),
        Remove(c) => c.run(&mut store),
        Summary(c) => c.run(&mut store),
        ExportCsv(c) => c.run(&mut store),
        ExportPdf(c) => c.run(&mut store),
    }
}
