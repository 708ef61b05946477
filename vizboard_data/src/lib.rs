// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record and dataset model for `vizboard`.
//!
//! The model is deliberately small:
//! - a [`Record`] is one labeled, categorized value with a calendar date,
//! - a [`Dataset`] is an append-only, versioned sequence of records with unique ids,
//! - a [`FilterSet`] selects the records that display,
//! - the [`transform`] functions derive the sorted, grouped, and aggregated views charts draw.

mod dataset;
mod error;
mod filter;
pub mod format;
pub mod mock;
mod record;
pub mod transform;

pub use dataset::{CategorySet, Dataset};
pub use error::{DataError, Result};
pub use filter::FilterSet;
pub use format::format_number;
pub use record::{DATE_FORMAT, Record};
pub use transform::{AggregateSlice, Series, SortOrder};
