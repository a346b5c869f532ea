//! Read-only snapshots of fleet records with search and status filtering.

use std::collections::HashSet;

use fleet_core::entities::{Asset, MaintenanceRecord, Operator};
use fleet_core::enums::{AssetStatus, MaintenanceStatus, OperatorStatus};

use crate::error::WorkflowError;

/// A record that can be looked up by id and matched by free text.
pub trait Searchable {
    type Status: Copy + PartialEq;

    /// Record name used in error messages.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn status(&self) -> Self::Status;

    /// Fields matched by [`Query::search`].
    fn search_fields(&self) -> [&str; 3];
}

impl Searchable for Asset {
    type Status = AssetStatus;
    const KIND: &'static str = "asset";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> AssetStatus {
        self.status
    }

    fn search_fields(&self) -> [&str; 3] {
        [self.id.as_str(), self.model.as_str(), self.serial_number.as_str()]
    }
}

impl Searchable for Operator {
    type Status = OperatorStatus;
    const KIND: &'static str = "operator";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> OperatorStatus {
        self.status
    }

    fn search_fields(&self) -> [&str; 3] {
        [self.name.as_str(), self.document.as_str(), self.email.as_str()]
    }
}

impl Searchable for MaintenanceRecord {
    type Status = MaintenanceStatus;
    const KIND: &'static str = "maintenance record";

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> MaintenanceStatus {
        self.status
    }

    fn search_fields(&self) -> [&str; 3] {
        [self.asset_model.as_str(), self.maintenance_type.as_str(), self.technician.as_str()]
    }
}

/// Filter for [`Directory::search`]. Empty fields match everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<S> {
    /// Case-insensitive substring matched against the record's search fields.
    pub search: Option<String>,
    pub status: Option<S>,
}

impl<S> Default for Query<S> {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
        }
    }
}

impl<S: Copy + PartialEq> Query<S> {
    fn matches<T: Searchable<Status = S>>(&self, record: &T, needle: Option<&str>) -> bool {
        if self.status.is_some_and(|status| record.status() != status) {
            return false;
        }
        needle.is_none_or(|needle| {
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
        })
    }
}

/// Immutable snapshot of records in their supplied order.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory<T> {
    records: Vec<T>,
}

pub type AssetDirectory = Directory<Asset>;
pub type OperatorDirectory = Directory<Operator>;
pub type MaintenanceLog = Directory<MaintenanceRecord>;

impl<T> Default for Directory<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Searchable> Directory<T> {
    /// # Errors
    ///
    /// [`WorkflowError::DuplicateRecord`] if two records share an id.
    pub fn new(records: Vec<T>) -> Result<Self, WorkflowError> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.id())) {
            return Err(WorkflowError::DuplicateRecord {
                kind: T::KIND,
                id: duplicate.id().to_owned(),
            });
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn search(&self, query: &Query<T::Status>) -> Vec<&T> {
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        self.records
            .iter()
            .filter(|record| query.matches(*record, needle.as_deref()))
            .collect()
    }
}
