use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{MaintenanceKind, Priority};

/// A validated maintenance scheduling request raised by an operator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MaintenanceRequest {
    pub asset_id: String,
    pub reason: String,
    pub requested_date: NaiveDate,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub kind: Option<MaintenanceKind>,
}
