use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw fleet counters as returned by the dashboard endpoint.
///
/// Field names follow the backend's camelCase JSON. Missing counters default
/// to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardMetrics {
    pub total_assets: u64,
    pub total_maintenance: u64,
    pub pending_maintenance: u64,
    pub completed_maintenance: u64,
    pub total_checklists: u64,
    pub approved_checklists: u64,
    pub rejected_checklists: u64,
    pub total_operators: u64,
}
