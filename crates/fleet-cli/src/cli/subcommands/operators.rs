use clap::Subcommand;

/// Operator commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OperatorCommands {
    /// List operators from the snapshot.
    List {
        /// Filter by status: active, inactive
        #[arg(long)]
        status: Option<String>,
        /// Case-insensitive match on name, document or email
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
