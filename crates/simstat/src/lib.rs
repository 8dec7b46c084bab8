//! Simulator statistics viewer.
//!
//! Reads a simulator-produced statistics JSON file, derives the IPC and CPI
//! throughput metrics, and renders everything as a fixed-width terminal
//! table via [`simstat_render`].
//!
//! The pipeline is a single pass: [`load::load_stats`] decodes the file,
//! [`report::build_records`] assembles the ordered record list, and
//! [`simstat_render::Table`] renders it. All I/O happens before rendering.

pub mod cli;
pub mod load;
pub mod report;

use cli::Cli;
use load::LoadError;
use simstat_render::{Layout, Table};

/// Run the full file-to-table pipeline, returning the rendered table text.
pub fn run(cli: &Cli) -> Result<String, LoadError> {
    let stats = load::load_stats(&cli.file)?;
    let records = report::build_records(&stats);
    let table = Table::new(Layout::new(cli.table_width()));
    Ok(table.render(&records))
}
