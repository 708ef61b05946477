// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised by the dataset model.
#[derive(Error, Debug)]
pub enum DataError {
    /// A record date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date {date:?}")]
    InvalidDate {
        /// The offending date string.
        date: String,
        /// The underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// Two records share an id.
    #[error("duplicate record id {0}")]
    DuplicateId(u64),
}

/// Result alias for dataset operations.
pub type Result<T> = core::result::Result<T, DataError>;
