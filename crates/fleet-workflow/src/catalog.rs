//! The fixed list of inspection items every checklist starts from.

use std::collections::HashSet;

use fleet_core::entities::InspectionItem;

use crate::checklist::Checklist;
use crate::error::WorkflowError;

/// Ordered, immutable template of inspection items.
///
/// Each checklist session gets its own copy through [`InspectionCatalog::instantiate`];
/// the template itself never carries checked flags or observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionCatalog {
    items: Vec<InspectionItem>,
}

impl InspectionCatalog {
    /// Build a catalog from template items.
    ///
    /// Any `checked`/`observation` state on the input is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Catalog`] if the list is empty or two items
    /// share an id.
    pub fn new(items: Vec<InspectionItem>) -> Result<Self, WorkflowError> {
        if items.is_empty() {
            return Err(WorkflowError::Catalog("catalog has no items".into()));
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(WorkflowError::Catalog(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
        }

        let items = items
            .into_iter()
            .map(|item| InspectionItem::new(item.id, item.description, item.category))
            .collect();
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[InspectionItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fresh, all-unchecked checklist for one session.
    #[must_use]
    pub fn instantiate(&self) -> Checklist {
        Checklist::new(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use fleet_core::enums::ItemCategory;

    use super::*;

    #[test]
    fn rejects_empty_catalog() {
        let err = InspectionCatalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, WorkflowError::Catalog(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = InspectionCatalog::new(vec![
            InspectionItem::new("1", "Test brakes", ItemCategory::Safety),
            InspectionItem::new("1", "Test horn", ItemCategory::Safety),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate item id '1'"));
    }

    #[test]
    fn clears_template_state() {
        let mut item = InspectionItem::new("1", "Test brakes", ItemCategory::Safety);
        item.checked = true;
        item.observation = Some("soft".into());

        let catalog = InspectionCatalog::new(vec![item]).unwrap();
        assert!(!catalog.items()[0].checked);
        assert_eq!(catalog.items()[0].observation, None);
    }

    #[test]
    fn instantiated_copies_are_independent() {
        let catalog = InspectionCatalog::new(vec![
            InspectionItem::new("1", "Test brakes", ItemCategory::Safety),
            InspectionItem::new("2", "Test horn", ItemCategory::Safety),
        ])
        .unwrap();

        let mut first = catalog.instantiate();
        first.set_checked("1", true);
        let second = catalog.instantiate();

        assert!(first.items()[0].checked);
        assert!(!second.items()[0].checked);
        assert!(!catalog.items()[0].checked);
    }
}
