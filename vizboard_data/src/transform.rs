// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record transforms: sorting, grouping, and aggregation.
//!
//! All transforms are pure and preserve input order wherever the operation leaves it
//! unspecified: sorts are stable, and groups appear in first-seen order.

use hashbrown::HashMap;

use crate::record::Record;

/// Sorting order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

/// The records of one category, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Category shared by every record.
    pub category: String,
    /// Member records.
    pub records: Vec<Record>,
}

/// The summed value of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateSlice {
    /// Category name.
    pub category: String,
    /// Sum of member values.
    pub value: f64,
}

/// Returns `records` stably sorted by value.
pub fn sort_by_value(records: &[Record], order: SortOrder) -> Vec<Record> {
    let mut out = records.to_vec();
    match order {
        SortOrder::Asc => out.sort_by(|a, b| a.value.total_cmp(&b.value)),
        SortOrder::Desc => out.sort_by(|a, b| b.value.total_cmp(&a.value)),
    }
    out
}

/// Returns `records` stably sorted by date string.
///
/// `YYYY-MM-DD` strings order lexically the same as the dates they name.
pub fn sort_by_date(records: &[Record], order: SortOrder) -> Vec<Record> {
    let mut out = records.to_vec();
    match order {
        SortOrder::Asc => out.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => out.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    out
}

/// Returns the distinct categories of `records` in first-seen order.
pub fn distinct_categories(records: &[Record]) -> Vec<String> {
    group_by_category(records)
        .into_iter()
        .map(|s| s.category)
        .collect()
}

/// Groups `records` by category. Groups appear in first-seen order; members keep input order.
pub fn group_by_category(records: &[Record]) -> Vec<Series> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<Series> = Vec::new();
    for record in records {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            out.push(Series {
                category: record.category.clone(),
                records: Vec::new(),
            });
            out.len() - 1
        });
        out[slot].records.push(record.clone());
    }
    out
}

/// Sums values per category, in first-seen order.
pub fn aggregate_by_category(records: &[Record]) -> Vec<AggregateSlice> {
    group_by_category(records)
        .into_iter()
        .map(|s| AggregateSlice {
            value: s.records.iter().map(|r| r.value).sum(),
            category: s.category,
        })
        .collect()
}

/// Largest value, or `None` for no records.
pub fn max_value(records: &[Record]) -> Option<f64> {
    records.iter().map(|r| r.value).reduce(f64::max)
}

/// Sum of all values.
pub fn total_value(records: &[Record]) -> f64 {
    records.iter().map(|r| r.value).sum()
}
