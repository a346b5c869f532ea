//! Status enums, categories, priorities, and workflow steps for fleetdeck.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `StepKind` carries the operator workflow's transition table, checked by
//! `OperatorWorkflow` before every step change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Operational status of a forklift. Only `available` units can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Available,
    InUse,
    UnderMaintenance,
    Alert,
}

impl AssetStatus {
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::InUse,
        Self::UnderMaintenance,
        Self::Alert,
    ];

    /// Whether the unit counts towards the operational share of the fleet.
    #[must_use]
    pub const fn is_operational(self) -> bool {
        matches!(self, Self::Available | Self::InUse)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::UnderMaintenance => "under_maintenance",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ItemCategory
// ---------------------------------------------------------------------------

/// Category of an inspection checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Safety,
    Operational,
    Mechanical,
}

impl ItemCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safety => "safety",
            Self::Operational => "operational",
            Self::Mechanical => "mechanical",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Urgency attached to defect reports, maintenance requests and records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaintenanceKind
// ---------------------------------------------------------------------------

/// Kind of maintenance an operator can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    Preventive,
    Corrective,
}

impl MaintenanceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preventive => "preventive",
            Self::Corrective => "corrective",
        }
    }
}

impl fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Status of a scheduled maintenance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl MaintenanceStatus {
    pub const ALL: [Self; 3] = [Self::Scheduled, Self::InProgress, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OperatorStatus
// ---------------------------------------------------------------------------

/// Employment status of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OperatorStatus {
    Active,
    Inactive,
}

impl OperatorStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for OperatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorkflowKind
// ---------------------------------------------------------------------------

/// The three operator sub-flows that end in a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    Checklist,
    DefectReport,
    MaintenanceRequest,
}

impl WorkflowKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checklist => "checklist",
            Self::DefectReport => "defect_report",
            Self::MaintenanceRequest => "maintenance_request",
        }
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StepKind
// ---------------------------------------------------------------------------

/// Discriminant of the operator workflow step.
///
/// ```text
/// select_asset → checklist | defect_report | maintenance_request
/// checklist | defect_report | maintenance_request → select_asset
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    SelectAsset,
    Checklist,
    DefectReport,
    MaintenanceRequest,
}

impl StepKind {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::SelectAsset => &[
                Self::Checklist,
                Self::DefectReport,
                Self::MaintenanceRequest,
            ],
            Self::Checklist | Self::DefectReport | Self::MaintenanceRequest => {
                &[Self::SelectAsset]
            }
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelectAsset => "select_asset",
            Self::Checklist => "checklist",
            Self::DefectReport => "defect_report",
            Self::MaintenanceRequest => "maintenance_request",
        }
    }
}

impl From<WorkflowKind> for StepKind {
    fn from(kind: WorkflowKind) -> Self {
        match kind {
            WorkflowKind::Checklist => Self::Checklist,
            WorkflowKind::DefectReport => Self::DefectReport,
            WorkflowKind::MaintenanceRequest => Self::MaintenanceRequest,
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompletionStatus
// ---------------------------------------------------------------------------

/// Derived completion state of a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    NotStarted,
    Partial,
    Complete,
}

impl CompletionStatus {
    /// Classify a checked/total pair. An empty checklist counts as complete.
    #[must_use]
    pub const fn from_counts(checked: usize, total: usize) -> Self {
        if checked >= total {
            Self::Complete
        } else if checked == 0 {
            Self::NotStarted
        } else {
            Self::Partial
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Partial => "partial",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
