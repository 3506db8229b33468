use super::WindowArgs;
use crate::libs::view::View;
use crate::report::individual::IndividualReport;
use crate::report::project::ProjectReport;
use crate::store::memory::MemoryStore;
use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "Path to the JSON dataset")]
    data: PathBuf,
    #[arg(long, help = "Build the report for this user id")]
    user: Option<i64>,
    #[arg(long, help = "Build the report for this project id")]
    project: Option<i64>,
    #[command(flatten)]
    window: WindowArgs,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let store = MemoryStore::load(&args.data)?;
    let window = args.window.window()?;

    match (args.user, args.project) {
        (Some(user_id), None) => match IndividualReport::build(&store, user_id, window).await? {
            Some(report) => View::individual(&report),
            None => {
                println!("User {} not found", user_id);
                Ok(())
            }
        },
        (None, Some(project_id)) => {
            match ProjectReport::build(&store, project_id, window, Utc::now()).await? {
                Some(report) => View::project(&report),
                None => {
                    println!("Project {} not found", project_id);
                    Ok(())
                }
            }
        }
        _ => bail!("specify exactly one of --user or --project"),
    }
}
