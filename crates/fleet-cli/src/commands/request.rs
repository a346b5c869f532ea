use fleet_core::enums::{MaintenanceKind, Priority, WorkflowKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RequestArgs;
use crate::commands::shared::parse::parse_optional_enum;
use crate::commands::shared::session::{SessionResources, receipt};
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck request`.
pub fn handle(args: &RequestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let priority = parse_optional_enum::<Priority>(args.priority.as_deref(), "priority")?;
    let kind = parse_optional_enum::<MaintenanceKind>(args.kind.as_deref(), "type")?;

    let resources = SessionResources::load(ctx)?;
    let mut workflow = resources.start(&args.asset, WorkflowKind::MaintenanceRequest)?;

    let form = workflow.maintenance_form()?;
    form.reason.clone_from(&args.reason);
    form.date.clone_from(&args.date);
    form.priority = priority;
    form.kind = kind;

    let submission = workflow.submit()?;
    output(&receipt(submission, workflow.step_kind()), flags.format)
}
