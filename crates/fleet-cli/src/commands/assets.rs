use fleet_core::entities::Asset;
use fleet_core::enums::AssetStatus;
use fleet_workflow::{AssetDirectory, Query};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssetCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck assets`.
pub fn handle(action: &AssetCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AssetCommands::List {
            status,
            search,
            available,
            limit,
        } => {
            let directory = ctx.assets()?;
            let status = if *available {
                Some(AssetStatus::Available)
            } else {
                parse_optional_enum(status.as_deref(), "status")?
            };
            let limit = effective_limit(*limit, flags.limit, ctx.default_limit());
            let assets = list(&directory, search.clone(), status, limit);
            output(&assets, flags.format)
        }
    }
}

fn list(
    directory: &AssetDirectory,
    search: Option<String>,
    status: Option<AssetStatus>,
    limit: u32,
) -> Vec<&Asset> {
    let mut assets = directory.search(&Query { search, status });
    truncate(&mut assets, limit);
    assets
}
