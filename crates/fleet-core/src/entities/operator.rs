use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::OperatorStatus;

/// A licensed forklift operator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Operator {
    pub id: String,
    pub name: String,
    pub document: String,
    pub phone: String,
    pub email: String,
    pub status: OperatorStatus,
    #[serde(default)]
    pub asset_id: Option<String>,
    pub total_hours: u64,
    #[serde(default)]
    pub shift_start: Option<String>,
    #[serde(default)]
    pub shift_end: Option<String>,
}
