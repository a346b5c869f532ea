//! Workflow error types.

use fleet_core::enums::{AssetStatus, StepKind};
use fleet_core::errors::CoreError;
use thiserror::Error;

/// A form failed validation on submit. The workflow stays on the current step.
///
/// `missing-hours`, `empty-description` and `missing-fields` are the base
/// codes. `invalid-hours` and `hours-out-of-order` refine the checklist's
/// hour readings: non-numeric input and `end < start`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Start or end hour reading is empty.
    #[error("missing-hours: start and end hour readings are required")]
    MissingHours,

    /// An hour reading is not a finite, non-negative number.
    #[error("invalid-hours: {field} reading '{value}' is not a number of hours")]
    InvalidHours { field: &'static str, value: String },

    /// End reading is lower than the start reading.
    #[error("hours-out-of-order: end reading {end} is lower than start reading {start}")]
    HoursOutOfOrder { start: f64, end: f64 },

    /// Defect description is empty after trimming.
    #[error("empty-description: describe the defect before submitting")]
    EmptyDescription,

    /// Maintenance request is missing its reason or a valid date.
    #[error("missing-fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
}

impl ValidationError {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingHours => "missing-hours",
            Self::InvalidHours { .. } => "invalid-hours",
            Self::HoursOutOfOrder { .. } => "hours-out-of-order",
            Self::EmptyDescription => "empty-description",
            Self::MissingFields { .. } => "missing-fields",
        }
    }
}

/// Errors raised by the operator workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A sub-flow was requested before an asset was selected.
    #[error("no asset selected")]
    NoAssetSelected,

    /// The asset exists but cannot be operated right now.
    #[error("asset {id} is {status} and cannot be selected")]
    AssetUnavailable { id: String, status: AssetStatus },

    /// An action was attempted in a step that does not support it.
    #[error("cannot {action} while in step {step}")]
    WrongStep {
        action: &'static str,
        step: StepKind,
    },

    /// The inspection catalog is unusable.
    #[error("invalid inspection catalog: {0}")]
    Catalog(String),

    /// A snapshot lists the same id twice.
    #[error("duplicate {kind} id '{id}' in snapshot")]
    DuplicateRecord { kind: &'static str, id: String },

    /// Submitted form data failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Lookup misses, rejected transitions, payload encoding.
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_lead_the_messages() {
        let errors = [
            ValidationError::MissingHours,
            ValidationError::InvalidHours {
                field: "start",
                value: "abc".into(),
            },
            ValidationError::HoursOutOfOrder {
                start: 10.0,
                end: 5.5,
            },
            ValidationError::EmptyDescription,
            ValidationError::MissingFields {
                fields: vec!["reason"],
            },
        ];
        for error in errors {
            assert!(error.to_string().starts_with(error.code()));
        }
    }

    #[test]
    fn missing_fields_lists_every_field() {
        let error = ValidationError::MissingFields {
            fields: vec!["reason", "date"],
        };
        assert_eq!(error.to_string(), "missing-fields: reason, date");
    }
}
