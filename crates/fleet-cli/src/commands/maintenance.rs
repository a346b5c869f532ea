use fleet_core::enums::MaintenanceStatus;
use fleet_metrics::MaintenanceBreakdown;
use fleet_workflow::Query;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MaintenanceCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck maintenance`.
pub fn handle(
    action: &MaintenanceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let log = ctx.maintenance()?;
    match action {
        MaintenanceCommands::List {
            status,
            search,
            limit,
        } => {
            let query = Query {
                search: search.clone(),
                status: parse_optional_enum::<MaintenanceStatus>(status.as_deref(), "status")?,
            };
            let mut records = log.search(&query);
            truncate(
                &mut records,
                effective_limit(*limit, flags.limit, ctx.default_limit()),
            );
            output(&records, flags.format)
        }
        MaintenanceCommands::Summary => {
            output(&MaintenanceBreakdown::from_records(log.records()), flags.format)
        }
    }
}
