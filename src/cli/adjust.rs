//! `gradecurve` adjust pipeline: load, adjust, persist, report.

use crate::cli::report::{RunReport, render_report};
use crate::config::{CellPolicy, load_config};
use crate::core::{adjust, summarize};
use crate::error::{Error, Result};
use crate::roster::{self, SheetStore, WorkbookFile, adjusted_path};
use std::path::PathBuf;
use tracing::info;

/// Command-line options for a run.
#[derive(Debug, Clone, Default)]
pub struct AdjustOptions {
    /// Input workbook.
    pub input: Option<PathBuf>,

    /// Output workbook; derived from the input name when absent.
    pub output: Option<PathBuf>,

    /// Config file overriding the default search.
    pub config: Option<PathBuf>,
}

/// Run the adjust command.
///
/// # Errors
///
/// Returns [`Error::InputMissing`] if no input was given, and otherwise any
/// config, read, validation, or write failure. Nothing is written unless
/// the roster was loaded and adjusted.
pub fn run(options: &AdjustOptions) -> Result<()> {
    let input = options.input.as_deref().ok_or(Error::InputMissing)?;
    let config = load_config(options.config.as_deref())?;
    let output = options
        .output
        .clone()
        .unwrap_or_else(|| adjusted_path(input));

    let source = WorkbookFile::new(input, config.input.sheet.as_str());
    let sink = WorkbookFile::new(&output, config.output.sheet.as_str());

    let report = process(&source, &sink, config.input.cells)?;

    println!("Scores adjusted. Saved to: {}", output.display());
    print!("{}", render_report(&report));
    Ok(())
}

/// Load a roster from `source`, adjust it, and write it to `sink`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the source holds no student rows,
/// before anything is adjusted or written. Read and write failures are
/// passed through.
pub fn process(
    source: &dyn SheetStore,
    sink: &dyn SheetStore,
    policy: CellPolicy,
) -> Result<RunReport> {
    let roster = roster::load(source, policy)?;
    if roster.is_empty() {
        return Err(Error::InvalidInput("no student rows found".to_string()));
    }
    info!(students = roster.len(), "roster loaded");

    let adjustment = adjust(roster);
    roster::persist(sink, &adjustment.roster)?;
    let summary = summarize(&adjustment.roster)?;

    Ok(RunReport {
        summary,
        floor_raised: adjustment.floor_raised,
        curve_raised: adjustment.curve_raised,
    })
}
