use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::InspectionItem;
use crate::enums::CompletionStatus;

/// A validated inspection checklist, ready for submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChecklistReport {
    pub asset_id: String,
    /// Hour-meter readings. Meters with a decimal display report fractions.
    pub start_hours: f64,
    pub end_hours: f64,
    pub items: Vec<InspectionItem>,
    pub completion: CompletionStatus,
}

impl ChecklistReport {
    /// Hours operated during the shift covered by this checklist.
    #[must_use]
    pub fn hours_operated(&self) -> f64 {
        (self.end_hours - self.start_hours).max(0.0)
    }
}
