// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-order conventions for chart-generated marks.
//!
//! Backends sort by `(z_index, MarkId)`, so marks sharing a layer paint in id order.

/// Series fills: bars and pie slices.
pub const SERIES_FILL: i32 = 0;
/// Series strokes: lines and pie leader lines.
pub const SERIES_STROKE: i32 = 10;
/// Series points: line markers.
pub const SERIES_POINTS: i32 = 20;
/// Labels attached to series marks (bar values, slice names).
pub const SERIES_LABELS: i32 = 25;

/// Axis domain lines and ticks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis titles.
pub const AXIS_TITLES: i32 = 50;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
