use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// A validated fault report raised by an operator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DefectReport {
    pub asset_id: String,
    pub description: String,
    #[serde(default)]
    pub priority: Option<Priority>,
}
