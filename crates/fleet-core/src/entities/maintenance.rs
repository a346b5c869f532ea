use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{MaintenanceStatus, Priority};

/// A scheduled or completed maintenance job on one asset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MaintenanceRecord {
    pub id: String,
    pub asset_id: String,
    pub asset_model: String,
    /// Free-text job type, e.g. "Oil change".
    pub maintenance_type: String,
    pub description: String,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    pub status: MaintenanceStatus,
    pub priority: Priority,
    pub technician: String,
    pub estimated_hours: u32,
    pub cost: f64,
}
