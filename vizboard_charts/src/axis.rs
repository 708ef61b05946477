// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An [`AxisSpec`] pairs a scale with an orientation and turns it into marks: a domain path with
//! outer ticks, one tick line and one label per tick value, and an optional rotated title.
//!
//! Mark ids are derived from `id_base`: the domain uses `id_base`, tick `i` uses
//! `id_base + 1 + i`, its label `id_base + 1000 + i`, and the title `id_base + 9000`.

use kurbo::{Point, Rect, Vec2};
use peniko::Brush;
use peniko::color::palette::css;
use vizboard_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, ScaleTime};
use crate::text_mark::TextMarkSpec;
use crate::time::format_time_tick;
use crate::z_order;

/// Axis colors and sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Paint for the domain path and tick lines.
    pub stroke: Brush,
    /// Width of the domain path and tick lines.
    pub stroke_width: f64,
    /// Paint for tick labels and the title.
    pub label_fill: Brush,
    /// Font size for tick labels and the title.
    pub font_size: f64,
}

impl AxisStyle {
    /// Uses one paint for rules and text.
    pub fn solid(brush: impl Into<Brush>) -> Self {
        let brush = brush.into();
        Self {
            stroke: brush.clone(),
            stroke_width: 1.0,
            label_fill: brush,
            font_size: 12.0,
        }
    }
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self::solid(css::BLACK)
    }
}

/// Which edge of the plot the axis hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// Below the plot, ticks pointing down.
    Bottom,
    /// Left of the plot, ticks pointing left.
    Left,
}

/// The scale an axis draws.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisScale {
    /// One tick per band, at the band center, labeled with the band name.
    Band(ScaleBand),
    /// Nice numeric ticks.
    Linear(ScaleLinear),
    /// Calendar-aligned ticks.
    Time(ScaleTime),
}

impl AxisScale {
    /// Tick positions along the axis and their labels.
    fn ticks(&self, count: usize) -> Vec<(f64, String)> {
        match self {
            Self::Band(band) => {
                let half = 0.5 * band.band_width();
                band.names()
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (band.x(i) + half, name.clone()))
                    .collect()
            }
            Self::Linear(scale) => {
                let step = scale.tick_step(count);
                scale
                    .ticks(count)
                    .into_iter()
                    .map(|v| (scale.map(v), format_tick_with_step(v, step)))
                    .collect()
            }
            Self::Time(scale) => scale
                .ticks(count)
                .into_iter()
                .map(|t| (scale.map(t), format_time_tick(t)))
                .collect(),
        }
    }
}

/// An axis specification.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// The axis scale, already ranged into plot coordinates.
    pub scale: AxisScale,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks for continuous scales.
    pub tick_count: usize,
    /// Tick line length.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Tick label rotation in degrees, about the label's own anchor.
    pub label_angle: f64,
    /// Extra label translation, applied after rotation.
    pub label_offset: Vec2,
    /// Label anchor override; defaults to middle (bottom) or end (left).
    pub label_anchor: Option<TextAnchor>,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional title, drawn rotated beside a left axis or centered below a bottom axis.
    pub title: Option<String>,
    /// Distance from the plot edge to the title.
    pub title_offset: f64,
}

impl AxisSpec {
    /// Creates an axis with 10 ticks, 6px tick lines, and 3px label padding.
    pub fn new(id_base: u64, scale: AxisScale, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale,
            orient,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            label_angle: 0.0,
            label_offset: Vec2::ZERO,
            label_anchor: None,
            style: AxisStyle::default(),
            title: None,
            title_offset: 40.0,
        }
    }

    /// Convenience constructor for a bottom axis.
    pub fn bottom(id_base: u64, scale: AxisScale) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a left axis.
    pub fn left(id_base: u64, scale: AxisScale) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Rotates tick labels by `angle` degrees and shifts them by `offset` afterwards.
    pub fn with_label_angle(mut self, angle: f64, offset: Vec2) -> Self {
        self.label_angle = angle;
        self.label_offset = offset;
        self
    }

    /// Overrides the tick label anchor.
    pub fn with_label_anchor(mut self, anchor: TextAnchor) -> Self {
        self.label_anchor = Some(anchor);
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Tick positions and labels, in plot coordinates along the axis.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        self.scale.ticks(self.tick_count)
    }

    /// Generates axis marks for `plot`.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let ticks = self.tick_labels();
        let mut out = Vec::with_capacity(2 * ticks.len() + 2);
        out.push(self.domain_mark(plot));

        let spacing = self.tick_size.max(0.0) + self.tick_padding;
        for (i, (pos, label)) in ticks.into_iter().enumerate() {
            let (tick_from, tick_to, label_pos, anchor, baseline) = match self.orient {
                AxisOrient::Bottom => {
                    let theta = self.label_angle.to_radians();
                    // The label sits `spacing` below the axis in its own rotated frame.
                    let along = Vec2::new(-spacing * theta.sin(), spacing * theta.cos());
                    (
                        Point::new(pos, plot.y1),
                        Point::new(pos, plot.y1 + self.tick_size),
                        Point::new(pos, plot.y1) + along + self.label_offset,
                        TextAnchor::Middle,
                        TextBaseline::Hanging,
                    )
                }
                AxisOrient::Left => (
                    Point::new(plot.x0, pos),
                    Point::new(plot.x0 - self.tick_size, pos),
                    Point::new(plot.x0 - spacing, pos) + self.label_offset,
                    TextAnchor::End,
                    TextBaseline::Middle,
                ),
            };
            out.push(
                RuleMarkSpec::new(
                    MarkId::from_raw(self.id_base + 1 + i as u64),
                    tick_from.x,
                    tick_from.y,
                    tick_to.x,
                    tick_to.y,
                )
                .with_stroke(self.style.stroke.clone(), self.style.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
            );
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    label_pos,
                    label,
                )
                .with_font_size(self.style.font_size)
                .with_fill(self.style.label_fill.clone())
                .with_anchor(self.label_anchor.unwrap_or(anchor))
                .with_baseline(baseline)
                .with_angle(self.label_angle)
                .with_z_index(z_order::AXIS_LABELS)
                .mark(),
            );
        }

        if let Some(title) = &self.title {
            let (pos, angle) = match self.orient {
                AxisOrient::Left => (
                    Point::new(plot.x0 - self.title_offset, plot.center().y),
                    -90.0,
                ),
                AxisOrient::Bottom => (
                    Point::new(plot.center().x, plot.y1 + self.title_offset),
                    0.0,
                ),
            };
            out.push(
                TextMarkSpec::new(MarkId::from_raw(self.id_base + 9000), pos, title.clone())
                    .with_font_size(self.style.font_size)
                    .with_fill(self.style.label_fill.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Alphabetic)
                    .with_angle(angle)
                    .with_z_index(z_order::AXIS_TITLES)
                    .mark(),
            );
        }
        out
    }

    /// The axis line with outer ticks at both ends.
    fn domain_mark(&self, plot: Rect) -> Mark {
        let t = self.tick_size;
        let points = match self.orient {
            AxisOrient::Bottom => [
                Point::new(plot.x0, plot.y1 + t),
                Point::new(plot.x0, plot.y1),
                Point::new(plot.x1, plot.y1),
                Point::new(plot.x1, plot.y1 + t),
            ],
            AxisOrient::Left => [
                Point::new(plot.x0 - t, plot.y1),
                Point::new(plot.x0, plot.y1),
                Point::new(plot.x0, plot.y0),
                Point::new(plot.x0 - t, plot.y0),
            ],
        };
        RuleMarkSpec::polyline(MarkId::from_raw(self.id_base), points)
            .with_stroke(self.style.stroke.clone(), self.style.stroke_width)
            .with_z_index(z_order::AXIS_RULES)
            .mark()
    }
}

#[cfg(test)]
mod tests {
    use vizboard_core::MarkPayload;

    use super::*;

    fn plot() -> Rect {
        Rect::new(60.0, 50.0, 750.0, 450.0)
    }

    fn labels(marks: &[Mark]) -> Vec<(MarkId, &vizboard_core::TextPayload)> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some((m.id, t)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn band_axis_labels_every_name_in_order() {
        let band = ScaleBand::new(["b", "a", "c"], (plot().x0, plot().x1)).with_padding(0.2);
        let marks = AxisSpec::bottom(100, AxisScale::Band(band.clone())).marks(plot());
        let texts = labels(&marks);
        let names: Vec<&str> = texts.iter().map(|(_, t)| t.text.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
        let center = band.x(1) + 0.5 * band.band_width();
        assert!((texts[1].1.pos.x - center).abs() < 1e-9);
        assert_eq!(texts[1].1.pos.y, plot().y1 + 9.0);
        assert_eq!(texts[1].0, MarkId::from_raw(1101));
    }

    #[test]
    fn rotated_labels_hang_below_and_left_of_the_tick() {
        let band = ScaleBand::new(["x"], (0.0, 100.0));
        let axis = AxisSpec::bottom(0, AxisScale::Band(band))
            .with_label_angle(-45.0, Vec2::new(-10.0, 0.0))
            .with_label_anchor(TextAnchor::End);
        let marks = axis.marks(Rect::new(0.0, 0.0, 100.0, 100.0));
        let (_, label) = labels(&marks)[0];
        let d = 9.0 * core::f64::consts::FRAC_1_SQRT_2;
        assert!((label.pos.x - (50.0 + d - 10.0)).abs() < 1e-9);
        assert!((label.pos.y - (100.0 + d)).abs() < 1e-9);
        assert_eq!(label.anchor, TextAnchor::End);
        assert_eq!(label.angle, -45.0);
    }

    #[test]
    fn left_axis_has_title_and_grouped_labels() {
        let scale = ScaleLinear::new((0.0, 1050.0), (plot().y1, plot().y0));
        let marks = AxisSpec::left(0, AxisScale::Linear(scale))
            .with_title("Value")
            .marks(plot());
        let texts = labels(&marks);
        let last = texts.iter().rev().find(|(id, _)| id.0 < 9000).unwrap().1;
        assert_eq!(last.text, "1,000");
        assert_eq!(last.anchor, TextAnchor::End);
        assert_eq!(last.pos.x, plot().x0 - 9.0);

        let title = texts.iter().find(|(id, _)| id.0 == 9000).unwrap().1;
        assert_eq!(title.text, "Value");
        assert_eq!(title.angle, -90.0);
        assert_eq!(title.pos, Point::new(20.0, 250.0));
    }

    #[test]
    fn domain_path_has_outer_ticks() {
        let scale = ScaleLinear::new((0.0, 10.0), (plot().y1, plot().y0));
        let marks = AxisSpec::left(0, AxisScale::Linear(scale)).marks(plot());
        let domain = marks.iter().find(|m| m.id == MarkId::from_raw(0)).unwrap();
        let MarkPayload::Path(p) = &domain.payload else {
            panic!("expected a path payload");
        };
        assert_eq!(p.path.elements().len(), 4);
        let bounds = domain.bounds().unwrap();
        assert_eq!(bounds.x0, plot().x0 - 6.0);
    }
}
