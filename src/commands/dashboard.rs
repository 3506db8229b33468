use super::WindowArgs;
use crate::libs::view::View;
use crate::report::dashboard::{CallerContext, DashboardMetrics, DashboardScope};
use crate::store::memory::MemoryStore;
use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[arg(long, help = "Path to the JSON dataset")]
    data: PathBuf,
    #[arg(long, help = "Id of the requesting user")]
    caller: i64,
    #[arg(long, help = "Caller may view any scope")]
    privileged: bool,
    #[arg(long, help = "Scope to one user id")]
    user: Option<i64>,
    #[arg(long, help = "Scope to one project id")]
    project: Option<i64>,
    #[command(flatten)]
    window: WindowArgs,
}

pub async fn cmd(args: DashboardArgs) -> Result<()> {
    let store = MemoryStore::load(&args.data)?;
    let scope = match (args.user, args.project) {
        (None, None) => DashboardScope::Everyone,
        (Some(user_id), None) => DashboardScope::User(user_id),
        (None, Some(project_id)) => DashboardScope::Project(project_id),
        _ => bail!("use at most one of --user or --project"),
    };
    let caller = CallerContext {
        user_id: args.caller,
        is_privileged: args.privileged,
    };

    let metrics = DashboardMetrics::build(&store, &caller, scope, &args.window.spec()?, Utc::now()).await?;

    View::dashboard(&metrics)
}
