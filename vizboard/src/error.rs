// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use vizboard_charts::{ParseChartKindError, ParseThemeError};
use vizboard_data::DataError;

/// Errors raised by the chart widget.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// A chart kind name other than `bar`, `line`, or `pie`.
    #[error("unknown chart kind {0:?}")]
    UnknownChartKind(String),

    /// A theme name other than `light` or `dark`.
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),

    /// The dataset rejected an update.
    #[error(transparent)]
    Data(#[from] DataError),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<ParseChartKindError> for WidgetError {
    fn from(err: ParseChartKindError) -> Self {
        Self::UnknownChartKind(err.0)
    }
}

impl From<ParseThemeError> for WidgetError {
    fn from(err: ParseThemeError) -> Self {
        Self::UnknownTheme(err.0)
    }
}

/// Result alias for widget operations.
pub type Result<T> = core::result::Result<T, WidgetError>;
