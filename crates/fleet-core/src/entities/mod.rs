//! Entity structs for all fleetdeck domain objects.
//!
//! Directory records (assets, operators, maintenance records) arrive as
//! read-only snapshots. Report structs are the validated payloads produced by
//! the operator workflow. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod asset;
mod checklist;
mod dashboard;
mod defect;
mod inspection;
mod maintenance;
mod operator;
mod request;

pub use asset::Asset;
pub use checklist::ChecklistReport;
pub use dashboard::DashboardMetrics;
pub use defect::DefectReport;
pub use inspection::InspectionItem;
pub use maintenance::MaintenanceRecord;
pub use operator::Operator;
pub use request::MaintenanceRequest;
