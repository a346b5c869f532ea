use clap::Subcommand;

/// Fleet-wide views.
#[derive(Clone, Debug, Subcommand)]
pub enum FleetCommands {
    /// Asset counts and shares per status.
    Status,
}
