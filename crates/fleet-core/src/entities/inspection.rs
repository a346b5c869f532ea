use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ItemCategory;

/// One line of the inspection checklist.
///
/// The catalog holds unchecked templates; every checklist session works on
/// its own copies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InspectionItem {
    pub id: String,
    pub description: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub observation: Option<String>,
}

impl InspectionItem {
    #[must_use]
    pub fn new(id: impl Into<String>, description: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            category,
            checked: false,
            observation: None,
        }
    }
}
