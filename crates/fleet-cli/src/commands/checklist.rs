use fleet_core::enums::WorkflowKind;
use fleet_core::responses::SubmissionReceipt;
use fleet_workflow::{Checklist, ChecklistSummary};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChecklistArgs;
use crate::commands::shared::session::{SessionResources, receipt};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ChecklistResponse {
    #[serde(flatten)]
    receipt: SubmissionReceipt,
    summary: ChecklistSummary,
    /// Item ids from `--check`/`--observe` that are not in the catalog.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignored_items: Vec<String>,
}

/// Handle `fleetdeck checklist`.
pub fn handle(args: &ChecklistArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resources = SessionResources::load(ctx)?;
    let mut workflow = resources.start(&args.asset, WorkflowKind::Checklist)?;

    let form = workflow.checklist_form()?;
    form.set_hours(args.start.as_str(), args.end.as_str());
    let ignored_items = apply_marks(form.checklist_mut(), args);
    let summary = form.checklist().summary();

    let submission = workflow.submit()?;
    output(
        &ChecklistResponse {
            receipt: receipt(submission, workflow.step_kind()),
            summary,
            ignored_items,
        },
        flags.format,
    )
}

/// Apply `--all`/`--check`/`--observe`. Returns ids that matched no item.
fn apply_marks(checklist: &mut Checklist, args: &ChecklistArgs) -> Vec<String> {
    let mut ignored = Vec::new();

    if args.all {
        let ids: Vec<String> = checklist.items().iter().map(|item| item.id.clone()).collect();
        for id in &ids {
            checklist.set_checked(id, true);
        }
    }
    for id in &args.checks {
        if !checklist.set_checked(id, true) {
            ignored.push(id.clone());
        }
    }
    for (id, text) in &args.observations {
        if !checklist.set_observation(id, text) {
            ignored.push(id.clone());
        }
    }

    for id in &ignored {
        tracing::warn!(item_id = %id, "checklist: no catalog item with this id; ignored");
    }
    ignored
}

#[cfg(test)]
mod tests {
    use fleet_core::enums::CompletionStatus;

    use super::*;

    fn args(checks: &[&str], all: bool, observations: &[(&str, &str)]) -> ChecklistArgs {
        ChecklistArgs {
            asset: "1".into(),
            start: "2450".into(),
            end: "2458".into(),
            checks: checks.iter().map(ToString::to_string).collect(),
            all,
            observations: observations
                .iter()
                .map(|(id, text)| ((*id).to_string(), (*text).to_string()))
                .collect(),
        }
    }

    fn fresh_checklist() -> Checklist {
        AppContext::new(fleet_config::FleetConfig::default())
            .catalog()
            .expect("built-in catalog")
            .instantiate()
    }

    #[test]
    fn marks_checks_and_reports_unknown_ids() {
        let mut checklist = fresh_checklist();
        let ignored = apply_marks(
            &mut checklist,
            &args(&["2", "4", "99"], false, &[("9", "drip"), ("42", "ghost")]),
        );

        assert_eq!(ignored, vec!["99".to_string(), "42".to_string()]);
        let summary = checklist.summary();
        assert_eq!(summary.checked_count, 2);
        assert_eq!(summary.total_count, 10);
        assert_eq!(checklist.items()[8].observation.as_deref(), Some("drip"));
    }

    #[test]
    fn all_flag_completes_the_checklist() {
        let mut checklist = fresh_checklist();
        let ignored = apply_marks(&mut checklist, &args(&[], true, &[]));
        assert!(ignored.is_empty());
        assert_eq!(checklist.completion(), CompletionStatus::Complete);
    }
}
