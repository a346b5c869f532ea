use anyhow::Context;
use fleet_core::enums::{StepKind, WorkflowKind};
use fleet_core::responses::SubmissionReceipt;
use fleet_workflow::{AssetDirectory, InspectionCatalog, JsonlSink, OperatorWorkflow, Submission};

use crate::context::AppContext;

/// Everything an operator workflow borrows for one command invocation.
pub struct SessionResources {
    pub assets: AssetDirectory,
    pub catalog: InspectionCatalog,
    pub sink: JsonlSink,
}

impl SessionResources {
    pub fn load(ctx: &AppContext) -> anyhow::Result<Self> {
        Ok(Self {
            assets: ctx.assets()?,
            catalog: ctx.catalog()?,
            sink: ctx.submission_sink()?,
        })
    }

    /// Select `asset_id` and enter the `kind` sub-flow.
    pub fn start(
        &self,
        asset_id: &str,
        kind: WorkflowKind,
    ) -> anyhow::Result<OperatorWorkflow<'_, JsonlSink>> {
        let mut workflow = OperatorWorkflow::new(&self.assets, &self.catalog, self.sink.clone());
        workflow
            .select_asset(asset_id)
            .with_context(|| format!("cannot start {kind} on asset '{asset_id}'"))?;
        workflow.enter(kind)?;
        Ok(workflow)
    }
}

/// Printable receipt for an accepted submission.
pub fn receipt(submission: Submission, step: StepKind) -> SubmissionReceipt {
    SubmissionReceipt {
        event: submission.event,
        persisted: submission.persisted,
        step,
    }
}
