//! Report subcommands and the flags they share

pub mod status;
pub mod team;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    app::{ApiSettings, App, ReportConfig},
    cli::output,
    pipeline::ReportKind,
};

/// Flags accepted by every report.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Directory the CSV report is written into
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// API root, overrides EPPO_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Fetch, filter and export one report, then print its summary.
pub(crate) fn run_report(
    settings: &ApiSettings,
    kind: ReportKind,
    common: &CommonArgs,
) -> Result<()> {
    let app = App::new(settings);
    let label = kind.label();
    let config = ReportConfig::new(kind).with_output_dir(&common.output_dir);

    let spinner = output::create_spinner(&format!(
        "Fetching experiments from {}",
        app.source().describe()
    ));
    let result = app.run_report(&config);
    spinner.finish_and_clear();

    let run = result.context("failed to fetch experiments")?;

    if run.report.is_empty() {
        println!("No experiments found for {label}; no report written.");
        return Ok(());
    }

    output::print_report_summary(&run);
    Ok(())
}
