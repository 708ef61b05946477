// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `vizboard_core`.
//!
//! This crate sits between the record store and the retained scene:
//! - **Scales** map data values into screen coordinates.
//! - **Guides** (axes, legends) and **series** (bars, lines, slices) are built by generating
//!   `vizboard_core::Mark`s with stable ids, so successive renders diff cleanly.
//! - **Hit regions** pair each interactive mark with the tooltip it shows.
//! - **Zoom** holds the pan/zoom transform the host applies to the whole chart.
//!
//! [`render`] turns a record slice into marks for one [`ChartKind`]. Text shaping is out of
//! scope; text marks store unshaped strings and layout uses a [`TextMeasurer`].

mod axis;
pub mod bar_chart;
mod bar_mark;
mod chart;
#[cfg(test)]
mod chart_tests;
mod color;
mod curve;
mod format;
mod hit;
mod layout;
mod legend;
pub mod line_chart;
mod line_mark;
mod measure;
pub mod pie_chart;
mod point_mark;
mod rule_mark;
mod scale;
mod sector_mark;
mod text_mark;
mod theme;
mod time;
mod z_order;
mod zoom;

pub use axis::{AxisOrient, AxisScale, AxisSpec, AxisStyle};
pub use bar_chart::bar_scales;
pub use bar_mark::BarMarkSpec;
pub use chart::{
    ChartContext, ChartKind, ChartRender, LEGEND_ID_BASE, ParseChartKindError, TransitionTimings,
    X_AXIS_ID_BASE, Y_AXIS_ID_BASE, render, value_scale,
};
pub use color::{CategoryColors, SET1, SET2};
pub use curve::monotone_x;
pub use hit::{HitRegion, HitShape, HoverEffect, TooltipPayload, hit_test};
pub use layout::{ChartLayout, Margins, Size};
pub use legend::{LegendItem, LegendSwatches};
pub use line_mark::{Interpolation, LineMarkSpec, path_length};
pub use measure::{HeuristicTextMeasurer, TextMeasurer, TextMetrics};
pub use pie_chart::{PieSlice, percentage_label, pie_slices};
pub use point_mark::{PointMarkSpec, circle_path};
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleBand, ScaleLinear, ScaleTime, nice_ticks, tick_step};
pub use sector_mark::{SectorMarkSpec, sector_centroid};
pub use text_mark::TextMarkSpec;
pub use theme::{ParseThemeError, Theme, ThemeStyle};
pub use time::{
    TimeInterval, TimeUnit, choose_interval, date_to_seconds, format_time_tick, time_ticks,
};
pub use z_order::*;
pub use zoom::{WheelDeltaMode, ZoomBehavior, ZoomTransform};
