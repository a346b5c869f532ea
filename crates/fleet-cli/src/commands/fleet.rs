use fleet_metrics::FleetStatusBreakdown;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FleetCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck fleet`.
pub fn handle(action: &FleetCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FleetCommands::Status => {
            let assets = ctx.assets()?;
            output(&FleetStatusBreakdown::from_assets(assets.records()), flags.format)
        }
    }
}
