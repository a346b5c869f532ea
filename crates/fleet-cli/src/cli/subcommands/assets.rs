use clap::Subcommand;

/// Asset (forklift) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssetCommands {
    /// List assets from the snapshot.
    List {
        /// Filter by status: available, in-use, under-maintenance, alert
        #[arg(long, conflicts_with = "available")]
        status: Option<String>,
        /// Case-insensitive match on id, model or serial number
        #[arg(long)]
        search: Option<String>,
        /// Only assets an operator can start a workflow on
        #[arg(long)]
        available: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
}
