use fleet_core::enums::{Priority, WorkflowKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DefectArgs;
use crate::commands::shared::parse::parse_optional_enum;
use crate::commands::shared::session::{SessionResources, receipt};
use crate::context::AppContext;
use crate::output::output;

/// Handle `fleetdeck defect`.
pub fn handle(args: &DefectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let priority = parse_optional_enum::<Priority>(args.priority.as_deref(), "priority")?;

    let resources = SessionResources::load(ctx)?;
    let mut workflow = resources.start(&args.asset, WorkflowKind::DefectReport)?;

    let form = workflow.defect_form()?;
    form.description.clone_from(&args.description);
    form.priority = priority;

    let submission = workflow.submit()?;
    output(&receipt(submission, workflow.step_kind()), flags.format)
}
