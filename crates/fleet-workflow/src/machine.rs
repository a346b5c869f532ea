//! The operator workflow state machine.
//!
//! ```text
//! SelectAsset ──enter──▶ Checklist | DefectReport | MaintenanceRequest
//!      ▲                              │
//!      └──────── submit / cancel ─────┘
//! ```
//!
//! Each sub-flow step carries its own form. Leaving a sub-flow drops the form,
//! so re-entering always starts from a fresh copy of the catalog.

use fleet_core::entities::Asset;
use fleet_core::enums::{AssetStatus, StepKind, WorkflowKind};
use fleet_core::errors::CoreError;
use fleet_core::events::SubmissionEvent;

use crate::catalog::InspectionCatalog;
use crate::directory::AssetDirectory;
use crate::error::WorkflowError;
use crate::forms::{ChecklistForm, DefectForm, MaintenanceForm};
use crate::sink::SubmissionSink;

/// Current step plus the form it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    SelectAsset,
    Checklist(ChecklistForm),
    DefectReport(DefectForm),
    MaintenanceRequest(MaintenanceForm),
}

impl Step {
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        match self {
            Self::SelectAsset => StepKind::SelectAsset,
            Self::Checklist(_) => StepKind::Checklist,
            Self::DefectReport(_) => StepKind::DefectReport,
            Self::MaintenanceRequest(_) => StepKind::MaintenanceRequest,
        }
    }
}

/// An accepted submission and whether the sink stored it.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub event: SubmissionEvent,
    /// `false` when the sink failed; the workflow still moved on.
    pub persisted: bool,
}

/// One operator's session against a fixed asset snapshot and catalog.
///
/// Accepted submissions go to the sink `S`. A sink failure is logged and does
/// not undo the submission.
#[derive(Debug)]
pub struct OperatorWorkflow<'a, S> {
    assets: &'a AssetDirectory,
    catalog: &'a InspectionCatalog,
    sink: S,
    selected: Option<String>,
    step: Step,
}

impl<'a, S: SubmissionSink> OperatorWorkflow<'a, S> {
    #[must_use]
    pub const fn new(assets: &'a AssetDirectory, catalog: &'a InspectionCatalog, sink: S) -> Self {
        Self {
            assets,
            catalog,
            sink,
            selected: None,
            step: Step::SelectAsset,
        }
    }

    #[must_use]
    pub const fn step(&self) -> &Step {
        &self.step
    }

    #[must_use]
    pub const fn step_kind(&self) -> StepKind {
        self.step.kind()
    }

    #[must_use]
    pub fn selected_asset(&self) -> Option<&'a Asset> {
        self.selected.as_deref().and_then(|id| self.assets.get(id))
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Choose the asset the next sub-flow will refer to.
    ///
    /// # Errors
    ///
    /// - `WrongStep` outside `SelectAsset`.
    /// - `Core(NotFound)` for an unknown id.
    /// - `AssetUnavailable` for an asset that is not `available`.
    ///
    /// The previous selection is kept on error.
    pub fn select_asset(&mut self, id: &str) -> Result<&'a Asset, WorkflowError> {
        self.expect_step(StepKind::SelectAsset, "select an asset")?;

        let asset = self.assets.get(id).ok_or_else(|| CoreError::NotFound {
            kind: "asset",
            id: id.to_owned(),
        })?;
        if asset.status != AssetStatus::Available {
            return Err(WorkflowError::AssetUnavailable {
                id: asset.id.clone(),
                status: asset.status,
            });
        }

        tracing::debug!(asset_id = %asset.id, asset = %asset.label(), "workflow: asset selected");
        self.selected = Some(asset.id.clone());
        Ok(asset)
    }

    /// Start a sub-flow for the selected asset.
    ///
    /// # Errors
    ///
    /// `NoAssetSelected` before any selection; `Core(InvalidTransition)` when
    /// already inside a sub-flow.
    pub fn enter(&mut self, kind: WorkflowKind) -> Result<(), WorkflowError> {
        if self.selected.is_none() {
            return Err(WorkflowError::NoAssetSelected);
        }
        self.transition(StepKind::from(kind))
    }

    /// Abandon the current sub-flow without validation. No-op in `SelectAsset`.
    pub fn cancel(&mut self) {
        if self.step.kind() == StepKind::SelectAsset {
            return;
        }
        self.step = Step::SelectAsset;
        tracing::debug!("workflow: cancelled");
    }

    /// # Errors
    ///
    /// `WrongStep` unless the checklist sub-flow is active.
    pub fn checklist_form(&mut self) -> Result<&mut ChecklistForm, WorkflowError> {
        match &mut self.step {
            Step::Checklist(form) => Ok(form),
            other => Err(wrong_step("edit the checklist", other)),
        }
    }

    /// # Errors
    ///
    /// `WrongStep` unless the defect report sub-flow is active.
    pub fn defect_form(&mut self) -> Result<&mut DefectForm, WorkflowError> {
        match &mut self.step {
            Step::DefectReport(form) => Ok(form),
            other => Err(wrong_step("edit the defect report", other)),
        }
    }

    /// # Errors
    ///
    /// `WrongStep` unless the maintenance request sub-flow is active.
    pub fn maintenance_form(&mut self) -> Result<&mut MaintenanceForm, WorkflowError> {
        match &mut self.step {
            Step::MaintenanceRequest(form) => Ok(form),
            other => Err(wrong_step("edit the maintenance request", other)),
        }
    }

    /// Validate the active form, emit it, and return to `SelectAsset`.
    ///
    /// The asset selection survives the submit. A sink failure is logged and
    /// reported through [`Submission::persisted`].
    ///
    /// # Errors
    ///
    /// `WrongStep` in `SelectAsset`; `Validation` when the form is incomplete,
    /// in which case the step and form are left untouched.
    pub fn submit(&mut self) -> Result<Submission, WorkflowError> {
        let Some(asset_id) = self.selected.as_deref() else {
            return Err(wrong_step("submit", &self.step));
        };

        let event = match &self.step {
            Step::SelectAsset => return Err(wrong_step("submit", &self.step)),
            Step::Checklist(form) => {
                let report = form.validate(asset_id)?;
                SubmissionEvent::new(asset_id, WorkflowKind::Checklist, &report)?
            }
            Step::DefectReport(form) => {
                let report = form.validate(asset_id)?;
                SubmissionEvent::new(asset_id, WorkflowKind::DefectReport, &report)?
            }
            Step::MaintenanceRequest(form) => {
                let request = form.validate(asset_id)?;
                SubmissionEvent::new(asset_id, WorkflowKind::MaintenanceRequest, &request)?
            }
        };

        let persisted = match self.sink.emit(&event) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(asset_id = %event.asset_id, kind = %event.kind, %error, "workflow: submission sink failed");
                false
            }
        };
        tracing::info!(asset_id = %event.asset_id, kind = %event.kind, persisted, "workflow: submission accepted");

        self.transition(StepKind::SelectAsset)?;
        Ok(Submission { event, persisted })
    }

    fn expect_step(&self, expected: StepKind, action: &'static str) -> Result<(), WorkflowError> {
        if self.step.kind() == expected {
            Ok(())
        } else {
            Err(wrong_step(action, &self.step))
        }
    }

    fn transition(&mut self, next: StepKind) -> Result<(), WorkflowError> {
        let current = self.step.kind();
        if !current.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: current,
                to: next,
            }
            .into());
        }

        self.step = match next {
            StepKind::SelectAsset => Step::SelectAsset,
            StepKind::Checklist => Step::Checklist(ChecklistForm::new(self.catalog.instantiate())),
            StepKind::DefectReport => Step::DefectReport(DefectForm::default()),
            StepKind::MaintenanceRequest => Step::MaintenanceRequest(MaintenanceForm::default()),
        };
        tracing::debug!(from = %current, to = %next, "workflow: step changed");
        Ok(())
    }
}

fn wrong_step(action: &'static str, step: &Step) -> WorkflowError {
    WorkflowError::WrongStep {
        action,
        step: step.kind(),
    }
}

#[cfg(test)]
mod tests {
    use fleet_core::entities::InspectionItem;
    use fleet_core::enums::ItemCategory;

    use super::*;

    fn fixtures() -> (AssetDirectory, InspectionCatalog) {
        let asset = |id: &str, status| Asset {
            id: id.into(),
            model: "Toyota 8FBE20".into(),
            serial_number: format!("SN-{id}"),
            status,
            operating_hours: 2450,
            operator_id: None,
            location: None,
            next_maintenance: None,
        };
        let assets = AssetDirectory::new(vec![
            asset("1", AssetStatus::Available),
            asset("2", AssetStatus::UnderMaintenance),
        ])
        .unwrap();
        let catalog = InspectionCatalog::new(vec![
            InspectionItem::new("1", "Test brakes", ItemCategory::Safety),
            InspectionItem::new("2", "Test horn", ItemCategory::Safety),
        ])
        .unwrap();
        (assets, catalog)
    }

    #[test]
    fn starts_in_select_asset_without_selection() {
        let (assets, catalog) = fixtures();
        let workflow = OperatorWorkflow::new(&assets, &catalog, Vec::new());
        assert_eq!(workflow.step_kind(), StepKind::SelectAsset);
        assert!(workflow.selected_asset().is_none());
    }

    #[test]
    fn unknown_and_unavailable_assets_are_rejected() {
        let (assets, catalog) = fixtures();
        let mut workflow = OperatorWorkflow::new(&assets, &catalog, Vec::new());

        let err = workflow.select_asset("9").unwrap_err();
        assert!(matches!(err, WorkflowError::Core(CoreError::NotFound { .. })));

        let err = workflow.select_asset("2").unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::AssetUnavailable {
                status: AssetStatus::UnderMaintenance,
                ..
            }
        ));
        assert!(workflow.selected_asset().is_none());
    }

    #[test]
    fn sub_flows_cannot_be_chained() {
        let (assets, catalog) = fixtures();
        let mut workflow = OperatorWorkflow::new(&assets, &catalog, Vec::new());
        workflow.select_asset("1").unwrap();
        workflow.enter(WorkflowKind::DefectReport).unwrap();

        let err = workflow.enter(WorkflowKind::Checklist).unwrap_err();
        assert!(matches!(err, WorkflowError::Core(CoreError::InvalidTransition { .. })));
        assert_eq!(workflow.step_kind(), StepKind::DefectReport);

        let err = workflow.select_asset("1").unwrap_err();
        assert!(matches!(err, WorkflowError::WrongStep { .. }));
    }

    #[test]
    fn form_accessors_reject_other_steps() {
        let (assets, catalog) = fixtures();
        let mut workflow = OperatorWorkflow::new(&assets, &catalog, Vec::new());
        workflow.select_asset("1").unwrap();
        workflow.enter(WorkflowKind::MaintenanceRequest).unwrap();

        assert!(workflow.maintenance_form().is_ok());
        let err = workflow.checklist_form().unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot edit the checklist while in step maintenance_request"
        );
        assert!(workflow.defect_form().is_err());
        assert_eq!(workflow.step_kind(), StepKind::MaintenanceRequest);
    }

    #[test]
    fn cancel_in_select_asset_is_a_no_op() {
        let (assets, catalog) = fixtures();
        let mut workflow = OperatorWorkflow::new(&assets, &catalog, Vec::new());
        workflow.select_asset("1").unwrap();
        workflow.cancel();
        assert_eq!(workflow.step_kind(), StepKind::SelectAsset);
        assert_eq!(workflow.selected_asset().map(|a| a.id.as_str()), Some("1"));
    }
}
