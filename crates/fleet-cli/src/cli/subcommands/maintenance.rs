use clap::Subcommand;

/// Maintenance record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MaintenanceCommands {
    /// List maintenance records from the snapshot.
    List {
        /// Filter by status: scheduled, in-progress, completed
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive match on asset model, type or technician
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Counts per status with cost and effort totals.
    Summary,
}
