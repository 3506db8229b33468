//! Command-line interface over the reporting engine.

pub mod dashboard;
pub mod export;
pub mod overview;
pub mod report;

use crate::libs::window::{DateWindow, RollingPeriod, WindowSpec};
use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Build a report for one user or one project")]
    Report(report::ReportArgs),
    #[command(about = "Build the organization-wide team overview")]
    Overview(overview::OverviewArgs),
    #[command(about = "Compute role-scoped dashboard metrics")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Export a computed report to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Report(args) => report::cmd(args).await,
            Commands::Overview(args) => overview::cmd(args).await,
            Commands::Dashboard(args) => dashboard::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Window selection shared by every subcommand: either a rolling period
/// or an explicit start/end pair. Defaults to the rolling month.
#[derive(Debug, Args)]
pub struct WindowArgs {
    #[arg(long, value_enum, help = "Rolling period anchored at today")]
    period: Option<RollingPeriod>,
    #[arg(long, help = "Window start date (YYYY-MM-DD), inclusive")]
    from: Option<NaiveDate>,
    #[arg(long, help = "Window end date (YYYY-MM-DD), inclusive")]
    to: Option<NaiveDate>,
}

impl WindowArgs {
    pub fn spec(&self) -> Result<WindowSpec> {
        match (self.period, self.from, self.to) {
            (Some(period), None, None) => Ok(WindowSpec::Rolling(period)),
            (None, Some(start), Some(end)) => Ok(WindowSpec::Custom { start, end }),
            (None, None, None) => Ok(WindowSpec::Rolling(RollingPeriod::Month)),
            _ => bail!("use either --period or both --from and --to"),
        }
    }

    pub fn window(&self) -> Result<DateWindow> {
        Ok(DateWindow::resolve(&self.spec()?, Utc::now()))
    }
}
