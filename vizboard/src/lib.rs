// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An interactive chart widget.
//!
//! [`ChartWidget`] draws a record collection as a bar, line, or pie chart into an SVG surface:
//! - **State** (records, theme, chart kind, category filters, width) lives in the widget, and
//!   every change runs a render pass through `vizboard_charts`.
//! - **Animation** is explicit: the host advances the widget clock and reads frames.
//! - **Interaction** is pointer-driven: hover yields a [`TooltipPayload`], wheel and drag pan
//!   and zoom bar and line charts.
//!
//! ```
//! use core::time::Duration;
//!
//! use kurbo::Point;
//! use vizboard::{ChartKind, ChartWidget, Record, WidgetConfig};
//!
//! let mut widget = ChartWidget::new(WidgetConfig::default()).unwrap();
//! widget
//!     .load(vec![
//!         Record::new(0, "Item 1", 50.0, "Product A", "2025-01-01"),
//!         Record::new(1, "Item 2", 30.0, "Product B", "2025-01-02"),
//!     ])
//!     .unwrap();
//! widget.set_chart_kind(ChartKind::Pie);
//! widget.advance(Duration::from_secs(1));
//! let frame = widget.svg();
//! assert!(frame.contains("Product A"));
//! widget.pointer_move(Point::new(1.0, 1.0));
//! assert!(widget.tooltip().is_none());
//! ```

mod config;
mod control;
mod error;
mod svg;
mod tooltip;
mod widget;
#[cfg(test)]
mod widget_tests;

pub use config::WidgetConfig;
pub use control::{CategoryOption, ChartKindOption, ControlPanel, INTERACTION_TIPS};
pub use error::{Result, WidgetError};
pub use tooltip::{TOOLTIP_FONT_SIZE, TOOLTIP_PADDING, TooltipLine, TooltipView, tooltip_lines};
pub use widget::ChartWidget;

pub use vizboard_charts::{
    ChartKind, HitRegion, HitShape, HoverEffect, Margins, Theme, TooltipPayload, TransitionTimings,
    WheelDeltaMode, ZoomTransform,
};
pub use vizboard_data::{Dataset, Record};
