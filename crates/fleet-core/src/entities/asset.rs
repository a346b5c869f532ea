use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AssetStatus;

/// A forklift tracked by the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Asset {
    pub id: String,
    pub model: String,
    pub serial_number: String,
    pub status: AssetStatus,
    /// Cumulative hour-meter reading.
    pub operating_hours: u64,
    /// Operator currently assigned to the unit. Not owned by the asset.
    #[serde(default)]
    pub operator_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub next_maintenance: Option<NaiveDate>,
}

impl Asset {
    /// Label used in selection lists: `model - serial (hours h)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} - {} ({}h)",
            self.model, self.serial_number, self.operating_hours
        )
    }
}
