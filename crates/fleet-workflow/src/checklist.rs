//! Per-session checklist state and completion summaries.

use std::collections::BTreeMap;

use fleet_core::entities::InspectionItem;
use fleet_core::enums::{CompletionStatus, ItemCategory};
use serde::Serialize;

/// Checked/total counts for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub checked: usize,
    pub total: usize,
}

/// Aggregate view of a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistSummary {
    pub checked_count: usize,
    pub total_count: usize,
    /// Only categories that have at least one item appear here.
    pub by_category: BTreeMap<ItemCategory, CategoryTally>,
}

impl ChecklistSummary {
    #[must_use]
    pub const fn completion(&self) -> CompletionStatus {
        CompletionStatus::from_counts(self.checked_count, self.total_count)
    }
}

/// Mutable copy of the catalog for one checklist session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<InspectionItem>,
}

impl Checklist {
    pub(crate) const fn new(items: Vec<InspectionItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[InspectionItem] {
        &self.items
    }

    /// Set the checked flag of one item. Unknown ids are ignored; the return
    /// value says whether an item matched.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        let Some(item) = self.find_mut(id) else {
            return false;
        };
        item.checked = checked;
        true
    }

    /// Attach free text to one item, stored exactly as given.
    pub fn set_observation(&mut self, id: &str, text: &str) -> bool {
        let Some(item) = self.find_mut(id) else {
            return false;
        };
        item.observation = Some(text.to_owned());
        true
    }

    #[must_use]
    pub fn summary(&self) -> ChecklistSummary {
        let mut by_category: BTreeMap<ItemCategory, CategoryTally> = BTreeMap::new();
        for item in &self.items {
            let tally = by_category.entry(item.category).or_default();
            tally.total += 1;
            if item.checked {
                tally.checked += 1;
            }
        }

        ChecklistSummary {
            checked_count: self.items.iter().filter(|item| item.checked).count(),
            total_count: self.items.len(),
            by_category,
        }
    }

    #[must_use]
    pub fn completion(&self) -> CompletionStatus {
        self.summary().completion()
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut InspectionItem> {
        let found = self.items.iter_mut().find(|item| item.id == id);
        if found.is_none() {
            tracing::debug!(item_id = id, "checklist: ignoring unknown item");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn three_items() -> Checklist {
        Checklist::new(vec![
            InspectionItem::new("1", "Check hydraulic oil level", ItemCategory::Mechanical),
            InspectionItem::new("2", "Test brakes", ItemCategory::Safety),
            InspectionItem::new("3", "Test horn", ItemCategory::Safety),
        ])
    }

    #[test]
    fn fresh_checklist_is_not_started() {
        let checklist = three_items();
        let summary = checklist.summary();
        assert_eq!(summary.checked_count, 0);
        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.completion(), CompletionStatus::NotStarted);
    }

    #[rstest]
    #[case(&["2"], CompletionStatus::Partial)]
    #[case(&["1", "2"], CompletionStatus::Partial)]
    #[case(&["1", "2", "3"], CompletionStatus::Complete)]
    fn completion_follows_checked_count(#[case] ids: &[&str], #[case] expected: CompletionStatus) {
        let mut checklist = three_items();
        for id in ids {
            assert!(checklist.set_checked(id, true));
        }
        assert_eq!(checklist.completion(), expected);
    }

    #[test]
    fn unknown_item_is_a_no_op() {
        let mut checklist = three_items();
        let before = checklist.clone();
        assert!(!checklist.set_checked("99", true));
        assert!(!checklist.set_observation("99", "ghost"));
        assert_eq!(checklist, before);
    }

    #[test]
    fn set_checked_can_uncheck() {
        let mut checklist = three_items();
        assert!(checklist.set_checked("2", true));
        assert!(checklist.set_checked("2", false));
        assert!(!checklist.items()[1].checked);
    }

    #[rstest]
    #[case("Level below minimum")]
    #[case("   ")]
    #[case("  leak at the left cylinder\n")]
    #[case("")]
    fn observation_is_stored_verbatim(#[case] text: &str) {
        let mut checklist = three_items();
        assert!(checklist.set_observation("1", "previous note"));
        assert!(checklist.set_observation("1", text));
        assert_eq!(checklist.items()[0].observation.as_deref(), Some(text));
        assert_eq!(checklist.items()[1].observation, None);
    }

    #[test]
    fn by_category_counts_sum_to_totals() {
        let mut checklist = three_items();
        checklist.set_checked("2", true);
        checklist.set_checked("1", true);
        let summary = checklist.summary();

        assert_eq!(
            summary.by_category[&ItemCategory::Safety],
            CategoryTally { checked: 1, total: 2 }
        );
        assert_eq!(
            summary.by_category[&ItemCategory::Mechanical],
            CategoryTally { checked: 1, total: 1 }
        );
        assert!(!summary.by_category.contains_key(&ItemCategory::Operational));

        let total: usize = summary.by_category.values().map(|t| t.total).sum();
        let checked: usize = summary.by_category.values().map(|t| t.checked).sum();
        assert_eq!(total, summary.total_count);
        assert_eq!(checked, summary.checked_count);
    }

    #[test]
    fn empty_checklist_counts_as_complete() {
        let checklist = Checklist::new(Vec::new());
        assert_eq!(checklist.completion(), CompletionStatus::Complete);
    }
}
