//! # fleet-workflow
//!
//! The operator-side core of fleetdeck: pick a forklift, then run an
//! inspection checklist, report a defect, or request maintenance.
//!
//! - [`OperatorWorkflow`] is the state machine that owns the in-progress form
//!   and validates it on submit.
//! - [`Checklist`] tracks per-item checked/observation state on a private
//!   copy of the [`InspectionCatalog`].
//! - [`SubmissionSink`] receives accepted submissions; [`JsonlSink`] appends
//!   them to a JSONL file.
//! - [`Directory`] wraps read-only snapshots of assets, operators and
//!   maintenance records with search and status filters.

mod catalog;
mod checklist;
mod directory;
mod error;
mod forms;
mod machine;
mod sink;

pub use catalog::InspectionCatalog;
pub use checklist::{CategoryTally, Checklist, ChecklistSummary};
pub use directory::{AssetDirectory, Directory, MaintenanceLog, OperatorDirectory, Query, Searchable};
pub use error::{ValidationError, WorkflowError};
pub use forms::{ChecklistForm, DefectForm, MaintenanceForm};
pub use machine::{OperatorWorkflow, Step, Submission};
pub use sink::{JsonlSink, SinkError, SubmissionSink};
