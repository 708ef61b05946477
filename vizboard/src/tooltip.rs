// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip presentation.
//!
//! A [`TooltipPayload`] says what was hovered; a [`TooltipView`] says how it reads and where the
//! panel sits.

use kurbo::{Point, Rect, Size, Vec2};
use vizboard_charts::{TextMeasurer, TooltipPayload};
use vizboard_data::format::format_short_date;

/// Font size of tooltip text.
pub const TOOLTIP_FONT_SIZE: f64 = 12.0;
/// Space between the panel edge and its text.
pub const TOOLTIP_PADDING: f64 = 8.0;

/// One line of the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipLine {
    /// Leading label such as `"Value"`; `None` for the title line.
    pub label: Option<&'static str>,
    /// The emphasized value.
    pub value: String,
}

impl TooltipLine {
    fn title(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }

    fn field(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label: Some(label),
            value: value.into(),
        }
    }

    /// The line as displayed, e.g. `Value: 50`.
    pub fn text(&self) -> String {
        match self.label {
            Some(label) => format!("{label}: {}", self.value),
            None => self.value.clone(),
        }
    }
}

/// A laid-out tooltip panel.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    /// Top-left corner of the panel.
    pub origin: Point,
    /// Lines top to bottom.
    pub lines: Vec<TooltipLine>,
    /// Height of one line.
    pub line_height: f64,
    /// Panel extent including padding.
    pub size: Size,
}

impl TooltipView {
    /// Formats `payload` and places the panel at its screen point plus `offset`.
    pub fn present(payload: &TooltipPayload, offset: Vec2, measurer: &dyn TextMeasurer) -> Self {
        let lines = tooltip_lines(payload);
        let mut width: f64 = 0.0;
        let mut line_height = TOOLTIP_FONT_SIZE;
        for line in &lines {
            let m = measurer.measure(&line.text(), TOOLTIP_FONT_SIZE);
            width = width.max(m.advance_width);
            line_height = line_height.max(m.line_height);
        }
        let rows = lines.len() as f64;
        Self {
            origin: payload.screen + offset,
            lines,
            line_height,
            size: Size::new(
                width + 2.0 * TOOLTIP_PADDING,
                rows * line_height + 2.0 * TOOLTIP_PADDING,
            ),
        }
    }

    /// The panel rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Baseline-middle position of line `i`.
    pub fn line_pos(&self, i: usize) -> Point {
        let row = i as f64;
        self.origin
            + Vec2::new(
                TOOLTIP_PADDING,
                TOOLTIP_PADDING + (row + 0.5) * self.line_height,
            )
    }
}

/// The panel lines for `payload`: name, value, then whichever of category, date, and
/// percentage it carries.
pub fn tooltip_lines(payload: &TooltipPayload) -> Vec<TooltipLine> {
    let mut lines = vec![
        TooltipLine::title(payload.name.clone()),
        TooltipLine::field("Value", format!("{}", payload.value)),
    ];
    if let Some(category) = &payload.category {
        lines.push(TooltipLine::field("Category", category.clone()));
    }
    if let Some(date) = payload.date {
        lines.push(TooltipLine::field("Date", format_short_date(date)));
    }
    if let Some(percentage) = &payload.percentage {
        lines.push(TooltipLine::field("Percentage", format!("{percentage}%")));
    }
    lines
}
