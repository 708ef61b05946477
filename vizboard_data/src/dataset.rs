// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;

use crate::error::{DataError, Result};
use crate::filter::FilterSet;
use crate::record::Record;
use crate::transform;

/// An append-only, versioned collection of records with unique ids.
///
/// The version increases on every append or replacement, so holders can tell two states of
/// the same dataset apart without comparing records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    version: u64,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dataset, rejecting duplicate ids.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        check_unique(&records)?;
        Ok(Self {
            records,
            version: 0,
        })
    }

    /// Replaces every record, rejecting duplicate ids. On error the dataset is unchanged.
    pub fn replace(&mut self, records: Vec<Record>) -> Result<()> {
        check_unique(&records)?;
        self.records = records;
        self.version += 1;
        Ok(())
    }

    /// Appends a record whose id is not yet in use.
    pub fn push(&mut self, record: Record) -> Result<()> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(DataError::DuplicateId(record.id));
        }
        self.records.push(record);
        self.version += 1;
        Ok(())
    }

    /// The id the next appended record should take: one past the largest id, or 0 when empty.
    pub fn next_id(&self) -> u64 {
        self.records
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Monotonic change counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> CategorySet {
        CategorySet {
            names: transform::distinct_categories(&self.records),
        }
    }

    /// The records that display under `filter`, in insertion order.
    pub fn filtered(&self, filter: &FilterSet) -> Vec<Record> {
        filter.apply(&self.records)
    }
}

fn check_unique(records: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for r in records {
        if !seen.insert(r.id) {
            return Err(DataError::DuplicateId(r.id));
        }
    }
    Ok(())
}

/// Distinct category names in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Names in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Iterates names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns `true` if `name` is a member.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two() -> Dataset {
        Dataset::from_records(vec![
            Record::new(0, "Item 1", 50.0, "Product A", "2025-01-01"),
            Record::new(4, "Item 5", 30.0, "Product B", "2025-01-02"),
        ])
        .unwrap()
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(Dataset::new().next_id(), 0);
        let mut ds = two();
        assert_eq!(ds.next_id(), 5);
        ds.push(Record::new(5, "Item 6", 1.0, "Product A", "2025-01-03"))
            .unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.next_id(), 6);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut ds = two();
        let before = ds.version();
        let err = ds
            .push(Record::new(4, "again", 1.0, "Product A", "2025-01-03"))
            .unwrap_err();
        assert!(matches!(err, DataError::DuplicateId(4)));
        assert_eq!(ds.version(), before, "failed appends leave the version alone");
        assert!(
            Dataset::from_records(vec![
                Record::new(1, "a", 1.0, "x", "2025-01-01"),
                Record::new(1, "b", 1.0, "x", "2025-01-01"),
            ])
            .is_err()
        );
    }

    #[test]
    fn version_tracks_changes() {
        let mut ds = two();
        assert_eq!(ds.version(), 0);
        ds.replace(Vec::new()).unwrap();
        assert_eq!(ds.version(), 1);
        assert!(ds.is_empty());
    }

    #[test]
    fn categories_in_first_seen_order() {
        let cats = two().categories();
        assert_eq!(cats.as_slice(), ["Product A", "Product B"]);
        assert!(cats.contains("Product B"));
    }
}
