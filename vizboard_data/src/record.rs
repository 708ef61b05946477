// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;

use crate::error::{DataError, Result};

/// Calendar date format used by record dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One labeled, categorized data point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Unique, stable id.
    pub id: u64,
    /// Display name (the bar chart's category axis label).
    pub name: String,
    /// Non-negative value.
    pub value: f64,
    /// Category (series, slice, and color key).
    pub category: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
}

impl Record {
    /// Creates a record.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        value: f64,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            category: category.into(),
            date: date.into(),
        }
    }

    /// Parses [`Record::date`].
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|source| {
            DataError::InvalidDate {
                date: self.date.clone(),
                source,
            }
        })
    }
}
