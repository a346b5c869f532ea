use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck catalog`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = ctx.catalog()?;
    output(&catalog.items(), flags.format)
}
