use super::WindowArgs;
use crate::libs::export::{Exporter, ExportFormat};
use crate::report::dashboard::{CallerContext, DashboardMetrics, DashboardScope};
use crate::report::individual::IndividualReport;
use crate::report::project::ProjectReport;
use crate::report::team::TeamOverview;
use crate::store::memory::MemoryStore;
use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, help = "Path to the JSON dataset")]
    data: PathBuf,
    #[arg(long, value_enum, default_value = "csv", help = "Output format")]
    format: ExportFormat,
    #[arg(long, help = "Output file path (defaults to a timestamped name)")]
    output: Option<PathBuf>,
    #[arg(long, help = "Export the report for this user id")]
    user: Option<i64>,
    #[arg(long, help = "Export the report for this project id")]
    project: Option<i64>,
    #[arg(long, help = "Export dashboard metrics as this caller id; --user/--project select the scope")]
    caller: Option<i64>,
    #[arg(long, requires = "caller", help = "Caller may view any scope")]
    privileged: bool,
    #[command(flatten)]
    window: WindowArgs,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let store = MemoryStore::load(&args.data)?;

    // With --caller the subcommand exports dashboard metrics instead of a
    // report; --user/--project turn into the scope selector.
    if let Some(caller_id) = args.caller {
        let scope = match (args.user, args.project) {
            (None, None) => DashboardScope::Everyone,
            (Some(user_id), None) => DashboardScope::User(user_id),
            (None, Some(project_id)) => DashboardScope::Project(project_id),
            _ => bail!("use at most one of --user or --project"),
        };
        let caller = CallerContext {
            user_id: caller_id,
            is_privileged: args.privileged,
        };
        let metrics = DashboardMetrics::build(&store, &caller, scope, &args.window.spec()?, Utc::now()).await?;
        let exporter = Exporter::new(args.format, args.output, "dashboard_metrics");
        exporter.write_dashboard(&metrics)?;
        println!("Exported to {}", exporter.output_path().display());
        return Ok(());
    }

    let window = args.window.window()?;

    match (args.user, args.project) {
        (Some(user_id), None) => {
            let Some(report) = IndividualReport::build(&store, user_id, window).await? else {
                bail!("user {} not found", user_id);
            };
            let exporter = Exporter::new(args.format, args.output, "individual_report");
            exporter.write_individual(&report)?;
            println!("Exported to {}", exporter.output_path().display());
        }
        (None, Some(project_id)) => {
            let Some(report) = ProjectReport::build(&store, project_id, window, Utc::now()).await? else {
                bail!("project {} not found", project_id);
            };
            let exporter = Exporter::new(args.format, args.output, "project_report");
            exporter.write_project(&report)?;
            println!("Exported to {}", exporter.output_path().display());
        }
        (None, None) => {
            let report = TeamOverview::build(&store, window).await?;
            let exporter = Exporter::new(args.format, args.output, "team_overview");
            exporter.write_team(&report)?;
            println!("Exported to {}", exporter.output_path().display());
        }
        _ => bail!("use at most one of --user or --project"),
    }

    Ok(())
}
