use fleet_core::enums::WorkflowKind;
use fleet_core::events::SubmissionEvent;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_optional_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck history`.
pub fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_optional_enum::<WorkflowKind>(args.kind.as_deref(), "kind")?;
    let events = ctx.submission_sink()?.read_all()?;
    let limit = effective_limit(args.limit, flags.limit, ctx.default_limit());
    output(&newest_first(events, args.asset.as_deref(), kind, limit), flags.format)
}

fn newest_first(
    mut events: Vec<SubmissionEvent>,
    asset: Option<&str>,
    kind: Option<WorkflowKind>,
    limit: u32,
) -> Vec<SubmissionEvent> {
    events.retain(|event| {
        asset.is_none_or(|asset| event.asset_id == asset) && kind.is_none_or(|kind| event.kind == kind)
    });
    events.reverse();
    truncate(&mut events, limit);
    events
}
