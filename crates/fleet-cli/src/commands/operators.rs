use fleet_core::enums::OperatorStatus;
use fleet_workflow::Query;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OperatorCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck operators`.
pub fn handle(action: &OperatorCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        OperatorCommands::List {
            status,
            search,
            limit,
        } => {
            let directory = ctx.operators()?;
            let query = Query {
                search: search.clone(),
                status: parse_optional_enum::<OperatorStatus>(status.as_deref(), "status")?,
            };
            let mut operators = directory.search(&query);
            truncate(
                &mut operators,
                effective_limit(*limit, flags.limit, ctx.default_limit()),
            );
            output(&operators, flags.format)
        }
    }
}
