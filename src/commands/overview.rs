use super::WindowArgs;
use crate::libs::view::View;
use crate::report::team::TeamOverview;
use crate::store::memory::MemoryStore;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OverviewArgs {
    #[arg(long, help = "Path to the JSON dataset")]
    data: PathBuf,
    #[command(flatten)]
    window: WindowArgs,
}

pub async fn cmd(args: OverviewArgs) -> Result<()> {
    let store = MemoryStore::load(&args.data)?;
    let report = TeamOverview::build(&store, args.window.window()?).await?;

    View::team(&report)
}
