// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::record::Record;

/// An ordered set of category names selecting which records display.
///
/// An empty set selects everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    categories: Vec<String>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `category` if absent, removes it if present. Returns whether it is now active.
    pub fn toggle(&mut self, category: &str) -> bool {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
            false
        } else {
            self.categories.push(category.to_owned());
            true
        }
    }

    /// Returns `true` if `category` is active.
    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Returns `true` if no category is active.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Active categories in toggle order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Deactivates every category.
    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Returns the records that display under this filter, in input order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        if self.is_empty() {
            return records.to_vec();
        }
        records
            .iter()
            .filter(|r| self.contains(&r.category))
            .cloned()
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            let category = category.into();
            if !set.contains(&category) {
                set.categories.push(category);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new(0, "Item 1", 50.0, "Product A", "2025-01-01"),
            Record::new(1, "Item 2", 30.0, "Product B", "2025-01-02"),
            Record::new(2, "Item 3", 20.0, "Product A", "2025-01-03"),
        ]
    }

    #[test]
    fn toggle_appends_then_removes() {
        let mut f = FilterSet::new();
        assert!(f.toggle("Product B"));
        assert!(f.toggle("Product A"));
        assert_eq!(f.iter().collect::<Vec<_>>(), vec!["Product B", "Product A"]);
        assert!(!f.toggle("Product B"));
        assert_eq!(f.iter().collect::<Vec<_>>(), vec!["Product A"]);
    }

    #[test]
    fn empty_filter_is_identity() {
        assert_eq!(FilterSet::new().apply(&rows()), rows());
    }

    #[test]
    fn union_of_all_categories_is_identity() {
        let f: FilterSet = ["Product A", "Product B"].into_iter().collect();
        assert_eq!(f.apply(&rows()), rows());
    }

    #[test]
    fn filter_keeps_matching_subsequence() {
        let f: FilterSet = ["Product A"].into_iter().collect();
        let ids: Vec<_> = f.apply(&rows()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}
