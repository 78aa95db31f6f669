//! Team command - Report the experiments owned by one team

use anyhow::Result;
use clap::Parser;

use super::{CommonArgs, run_report};
use crate::{
    app::{ApiSettings, env_lookup, load_team_id},
    pipeline::ReportKind,
};

#[derive(Parser, Debug)]
#[command(about = "Report experiments owned by one team")]
pub struct TeamArgs {
    /// Team identifier, overrides TEAM_ID
    #[arg(long, short = 't')]
    pub team_id: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute(args: TeamArgs) -> Result<()> {
    let settings = ApiSettings::from_env()?.with_base_url(args.common.base_url.clone());
    let team = load_team_id(args.team_id, env_lookup)?;

    run_report(&settings, ReportKind::Team(team), &args.common)
}
