//! Status command - Report experiments that are ready or wrapping up

use anyhow::Result;
use clap::Parser;

use super::{CommonArgs, run_report};
use crate::{app::ApiSettings, pipeline::ReportKind};

#[derive(Parser, Debug)]
#[command(about = "Report experiments in the ready or wrap_up state")]
pub struct StatusArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: StatusArgs) -> Result<()> {
    let settings = ApiSettings::from_env()?.with_base_url(args.common.base_url.clone());

    run_report(&settings, ReportKind::Status, &args.common)
}
