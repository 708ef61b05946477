// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random demo records.
//!
//! Values are whole numbers in `[10, 99]`, categories are drawn uniformly from [`CATEGORIES`],
//! and dates fall within the 30 days ending at `today`. Pass a seeded RNG for reproducible data.

use chrono::{Days, NaiveDate, Utc};
use rand::Rng;

use crate::dataset::Dataset;
use crate::record::{DATE_FORMAT, Record};

/// Categories used by generated records.
pub const CATEGORIES: [&str; 4] = ["Product A", "Product B", "Product C", "Product D"];

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Generates `count` records with ids `0..count` named `Item 1`, `Item 2`, ...
pub fn generate(count: usize, today: NaiveDate, rng: &mut impl Rng) -> Dataset {
    let mut ds = Dataset::new();
    let records = (0..count as u64)
        .map(|id| {
            let back = Days::new(rng.random_range(0..30));
            let date = today.checked_sub_days(back).unwrap_or(today);
            random_record(id, date, rng)
        })
        .collect();
    // Sequential ids never collide.
    if let Err(err) = ds.replace(records) {
        log::warn!("discarding generated records: {err}");
    }
    log::debug!("generated {} mock records", ds.len());
    ds
}

/// Builds the record an "add point" action appends: the next id, dated `today`.
pub fn next_point(dataset: &Dataset, today: NaiveDate, rng: &mut impl Rng) -> Record {
    random_record(dataset.next_id(), today, rng)
}

fn random_record(id: u64, date: NaiveDate, rng: &mut impl Rng) -> Record {
    let value = f64::from(rng.random_range(10_u32..100));
    let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
    Record::new(
        id,
        format!("Item {}", id + 1),
        value,
        category,
        date.format(DATE_FORMAT).to_string(),
    )
}
