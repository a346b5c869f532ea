//! Response types exchanged with the backend and printed by `fleetdeck`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StepKind;
use crate::events::SubmissionEvent;

/// Body of a successful `POST /api/admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Output of `fleetdeck checklist|defect|request`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubmissionReceipt {
    pub event: SubmissionEvent,
    /// Whether the event reached the submission log.
    pub persisted: bool,
    /// Step the workflow returned to after the submission.
    pub step: StepKind,
}
