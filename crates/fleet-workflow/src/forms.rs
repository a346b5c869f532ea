//! In-progress form data for each sub-flow and its submit-time validation.
//!
//! Forms hold raw text exactly as the operator typed it. Parsing and checks
//! happen only in `validate`, which turns a form into a domain report.

use chrono::NaiveDate;
use fleet_core::entities::{ChecklistReport, DefectReport, MaintenanceRequest};
use fleet_core::enums::{MaintenanceKind, Priority};

use crate::checklist::Checklist;
use crate::error::ValidationError;

/// Date format accepted for maintenance requests.
const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistForm {
    pub start_hours: String,
    pub end_hours: String,
    checklist: Checklist,
}

impl ChecklistForm {
    #[must_use]
    pub const fn new(checklist: Checklist) -> Self {
        Self {
            start_hours: String::new(),
            end_hours: String::new(),
            checklist,
        }
    }

    #[must_use]
    pub const fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub const fn checklist_mut(&mut self) -> &mut Checklist {
        &mut self.checklist
    }

    pub fn set_hours(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.start_hours = start.into();
        self.end_hours = end.into();
    }

    /// # Errors
    ///
    /// `MissingHours` when either reading is blank, `InvalidHours` when one is
    /// not a finite non-negative number, `HoursOutOfOrder` when end is below
    /// start.
    pub fn validate(&self, asset_id: &str) -> Result<ChecklistReport, ValidationError> {
        let start = self.start_hours.trim();
        let end = self.end_hours.trim();
        if start.is_empty() || end.is_empty() {
            return Err(ValidationError::MissingHours);
        }

        let start = parse_hours("start", start)?;
        let end = parse_hours("end", end)?;
        if end < start {
            return Err(ValidationError::HoursOutOfOrder { start, end });
        }

        Ok(ChecklistReport {
            asset_id: asset_id.to_owned(),
            start_hours: start,
            end_hours: end,
            items: self.checklist.items().to_vec(),
            completion: self.checklist.completion(),
        })
    }
}

/// Hour-meter readings are decimal numbers; `inf`, `NaN` and negatives are not.
fn parse_hours(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite() && *hours >= 0.0)
        .ok_or_else(|| ValidationError::InvalidHours {
            field,
            value: raw.to_owned(),
        })
}

// ---------------------------------------------------------------------------
// Defect report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefectForm {
    pub description: String,
    pub priority: Option<Priority>,
}

impl DefectForm {
    /// The stored description is trimmed.
    ///
    /// # Errors
    ///
    /// `EmptyDescription` when the description is blank.
    pub fn validate(&self, asset_id: &str) -> Result<DefectReport, ValidationError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(DefectReport {
            asset_id: asset_id.to_owned(),
            description: description.to_owned(),
            priority: self.priority,
        })
    }
}

// ---------------------------------------------------------------------------
// Maintenance request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceForm {
    pub reason: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub priority: Option<Priority>,
    pub kind: Option<MaintenanceKind>,
}

impl MaintenanceForm {
    /// # Errors
    ///
    /// `MissingFields` naming `reason` and/or `date` when the reason is blank
    /// or the date is blank or not a calendar date.
    pub fn validate(&self, asset_id: &str) -> Result<MaintenanceRequest, ValidationError> {
        let reason = self.reason.trim();
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok();

        let mut fields = Vec::new();
        if reason.is_empty() {
            fields.push("reason");
        }
        if date.is_none() {
            fields.push("date");
        }

        match date {
            Some(requested_date) if fields.is_empty() => Ok(MaintenanceRequest {
                asset_id: asset_id.to_owned(),
                reason: reason.to_owned(),
                requested_date,
                priority: self.priority,
                kind: self.kind,
            }),
            _ => Err(ValidationError::MissingFields { fields }),
        }
    }
}
