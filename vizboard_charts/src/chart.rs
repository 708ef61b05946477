// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart kinds and the shared render context.
//!
//! Each render pass is a pure function of the records and a [`ChartContext`]: it returns every
//! mark to show plus the hover regions, and never mutates its inputs.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use kurbo::Rect;
use vizboard_core::Mark;
use vizboard_data::Record;
use vizboard_data::transform::max_value;

use crate::axis::{AxisScale, AxisSpec, AxisStyle};
use crate::hit::HitRegion;
use crate::layout::ChartLayout;
use crate::scale::ScaleLinear;
use crate::theme::Theme;
use crate::{bar_chart, line_chart, pie_chart};

/// Id base for the horizontal axis.
pub const X_AXIS_ID_BASE: u64 = 10_000;
/// Id base for the vertical axis.
pub const Y_AXIS_ID_BASE: u64 = 20_000;
/// Id base for the legend.
pub const LEGEND_ID_BASE: u64 = 40_000;

/// Row-id groups for data-bound marks (see `MarkId::for_row`).
pub(crate) mod groups {
    pub(crate) const BARS: u16 = 1;
    pub(crate) const BAR_LABELS: u16 = 2;
    pub(crate) const LINES: u16 = 3;
    pub(crate) const MARKERS: u16 = 4;
    pub(crate) const SLICES: u16 = 5;
    pub(crate) const SLICE_LABELS: u16 = 6;
    pub(crate) const LEADERS: u16 = 7;
}

/// The three chart kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Value-sorted bars.
    #[default]
    Bar,
    /// Date-ordered lines, one per category.
    Line,
    /// Category sums as pie slices.
    Pie,
}

impl ChartKind {
    /// All kinds, in control-panel order.
    pub const ALL: [Self; 3] = [Self::Bar, Self::Line, Self::Pie];

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }

    /// Human-readable name for selection controls.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar Chart",
            Self::Line => "Line Chart",
            Self::Pie => "Pie Chart",
        }
    }

    /// Returns `true` for kinds with pan/zoom.
    pub fn supports_zoom(self) -> bool {
        !matches!(self, Self::Pie)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown chart kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseChartKindError(pub String);

impl fmt::Display for ParseChartKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chart kind `{}`", self.0)
    }
}

impl core::error::Error for ParseChartKindError {}

impl FromStr for ChartKind {
    type Err = ParseChartKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "pie" => Ok(Self::Pie),
            other => Err(ParseChartKindError(other.to_owned())),
        }
    }
}

/// Entry animation lengths, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TransitionTimings {
    /// Bar growth.
    pub bar_ms: u64,
    /// Bar value label fade-in.
    pub labels_ms: u64,
    /// Line draw-on.
    pub line_ms: u64,
    /// Pie slice sweep.
    pub pie_ms: u64,
}

impl TransitionTimings {
    /// No animation at all.
    pub const INSTANT: Self = Self {
        bar_ms: 0,
        labels_ms: 0,
        line_ms: 0,
        pie_ms: 0,
    };

    /// Bar growth duration.
    pub fn bar(&self) -> Duration {
        Duration::from_millis(self.bar_ms)
    }

    /// Label fade duration.
    pub fn labels(&self) -> Duration {
        Duration::from_millis(self.labels_ms)
    }

    /// Line draw-on duration.
    pub fn line(&self) -> Duration {
        Duration::from_millis(self.line_ms)
    }

    /// Pie sweep duration.
    pub fn pie(&self) -> Duration {
        Duration::from_millis(self.pie_ms)
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            bar_ms: 800,
            labels_ms: 1000,
            line_ms: 2000,
            pie_ms: 1000,
        }
    }
}

/// Everything a renderer needs besides the records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartContext {
    /// View and plot rectangles.
    pub layout: ChartLayout,
    /// Color theme.
    pub theme: Theme,
    /// Animation lengths.
    pub timings: TransitionTimings,
}

impl ChartContext {
    /// Creates a context with default timings.
    pub fn new(layout: ChartLayout, theme: Theme) -> Self {
        Self {
            layout,
            theme,
            timings: TransitionTimings::default(),
        }
    }

    /// Sets the animation lengths.
    pub fn with_timings(mut self, timings: TransitionTimings) -> Self {
        self.timings = timings;
        self
    }

    /// The plot rectangle.
    pub fn plot(&self) -> Rect {
        self.layout.plot
    }
}

/// The output of one render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartRender {
    /// Marks in emission order.
    pub marks: Vec<Mark>,
    /// Hover regions in paint order.
    pub hits: Vec<HitRegion>,
}

impl ChartRender {
    /// Returns `true` if nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Renders `records` as `kind`. An empty record list renders nothing.
pub fn render(kind: ChartKind, records: &[Record], ctx: &ChartContext) -> ChartRender {
    if records.is_empty() {
        return ChartRender::default();
    }
    match kind {
        ChartKind::Bar => bar_chart::render(records, ctx),
        ChartKind::Line => line_chart::render(records, ctx),
        ChartKind::Pie => pie_chart::render(records, ctx),
    }
}

/// The value axis scale: `[0, max * 1.1]` onto the plot, bottom to top.
pub fn value_scale(records: &[Record], plot: Rect) -> ScaleLinear {
    let max = max_value(records).unwrap_or(0.0);
    ScaleLinear::new((0.0, max * 1.1), (plot.y1, plot.y0))
}

/// The left value axis with its rotated "Value" title.
pub(crate) fn value_axis(scale: ScaleLinear, ctx: &ChartContext) -> AxisSpec {
    AxisSpec::left(Y_AXIS_ID_BASE, AxisScale::Linear(scale))
        .with_style(AxisStyle::solid(ctx.theme.style().text))
        .with_title("Value")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_and_display() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.as_str().parse::<ChartKind>(), Ok(kind));
        }
        assert_eq!(
            "scatter".parse::<ChartKind>(),
            Err(ParseChartKindError("scatter".into()))
        );
        assert_eq!(ChartKind::Pie.label(), "Pie Chart");
        assert!(!ChartKind::Pie.supports_zoom());
        assert!(ChartKind::Line.supports_zoom());
    }

    #[test]
    fn value_scale_pads_the_maximum() {
        let records = [
            Record::new(0, "Item 1", 50.0, "Product A", "2025-01-01"),
            Record::new(1, "Item 2", 30.0, "Product B", "2025-01-02"),
        ];
        let plot = Rect::new(0.0, 0.0, 100.0, 400.0);
        let s = value_scale(&records, plot);
        assert_eq!(s.domain(), (0.0, 50.0 * 1.1));
        assert_eq!(s.range(), (400.0, 0.0));
    }
}
