// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart: one slice per category sum, in first-seen order.
//!
//! Slices are not sorted by size. Labels sit outside the pie on either side and connect to their
//! slice through a three-point leader line.

use core::f64::consts::{PI, TAU};

use kurbo::Point;
use vizboard_core::{MarkId, TextAnchor, TextBaseline};
use vizboard_data::Record;
use vizboard_data::transform::aggregate_by_category;

use crate::chart::{ChartContext, ChartRender, LEGEND_ID_BASE, groups};
use crate::color::CategoryColors;
use crate::hit::{HitRegion, HitShape, HoverEffect, TooltipPayload};
use crate::legend::{LegendItem, LegendSwatches};
use crate::rule_mark::RuleMarkSpec;
use crate::sector_mark::{SectorMarkSpec, sector_centroid};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Slice opacity at rest.
pub const SLICE_OPACITY: f64 = 0.7;
/// Slice opacity while hovered.
pub const HOVER_OPACITY: f64 = 1.0;
/// Distance from the plot's right edge to the legend's swatch column.
const LEGEND_INSET: f64 = 80.0;

/// One laid-out slice.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    /// Category name.
    pub category: String,
    /// Category sum.
    pub value: f64,
    /// Start angle, clockwise from 12 o'clock.
    pub start_angle: f64,
    /// End angle.
    pub end_angle: f64,
}

impl PieSlice {
    /// Angle halfway through the slice.
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }
}

/// Aggregates `records` by category and lays the sums out around the circle.
///
/// A zero total yields zero-width slices.
pub fn pie_slices(records: &[Record]) -> Vec<PieSlice> {
    let aggregates = aggregate_by_category(records);
    let total: f64 = aggregates.iter().map(|a| a.value).sum();
    let scale = if total > 0.0 { TAU / total } else { 0.0 };
    let mut angle = 0.0;
    aggregates
        .into_iter()
        .map(|a| {
            let start_angle = angle;
            angle += a.value * scale;
            PieSlice {
                category: a.category,
                value: a.value,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

/// `value / total * 100` to one decimal, halves rounded up.
pub fn percentage_label(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return format!("{:.1}", 0.0);
    }
    let tenths = (value / total * 1000.0).round();
    format!("{:.1}", tenths / 10.0)
}

pub(crate) fn render(records: &[Record], ctx: &ChartContext) -> ChartRender {
    let slices = pie_slices(records);
    let total: f64 = slices.iter().map(|s| s.value).sum();
    let plot = ctx.plot();
    let style = ctx.theme.style();
    let colors =
        CategoryColors::from_categories(style.palette, slices.iter().map(|s| s.category.as_str()));

    let center = plot.center();
    let radius = 0.5 * plot.width().min(plot.height());
    let outer = 0.8 * radius;
    let guide = 0.9 * radius;

    let mut out = ChartRender::default();
    for (i, slice) in slices.iter().enumerate() {
        let key = i as u64;
        let id = MarkId::for_row(groups::SLICES, key);
        let color = colors.get(&slice.category).unwrap_or(style.text);
        let (start, end) = (slice.start_angle, slice.end_angle);

        out.marks.push(
            SectorMarkSpec::new(id, center, 0.0, outer, start, end)
                .with_fill(color)
                .with_stroke(style.slice_stroke, 2.0)
                .with_opacity(SLICE_OPACITY)
                .with_sweep((0.0, 0.0), ctx.timings.pie())
                .mark(),
        );

        let right = slice.mid_angle() < PI;
        let guide_point = sector_centroid(center, guide, guide, start, end);
        let side = if right { 1.0 } else { -1.0 };
        let label_pos = Point::new(center.x + side * 0.95 * radius, guide_point.y);
        out.marks.push(
            TextMarkSpec::new(
                MarkId::for_row(groups::SLICE_LABELS, key),
                label_pos,
                slice.category.clone(),
            )
            .with_anchor(if right {
                TextAnchor::Start
            } else {
                TextAnchor::End
            })
            .with_baseline(TextBaseline::Middle)
            .with_fill(style.text)
            .mark(),
        );
        out.marks.push(
            RuleMarkSpec::polyline(
                MarkId::for_row(groups::LEADERS, key),
                [
                    sector_centroid(center, 0.0, outer, start, end),
                    guide_point,
                    label_pos,
                ],
            )
            .with_stroke(style.text, 1.0)
            .with_z_index(z_order::SERIES_STROKE)
            .mark(),
        );

        out.hits.push(HitRegion {
            mark: id,
            shape: HitShape::Sector {
                center,
                inner_radius: 0.0,
                outer_radius: outer,
                start_angle: start,
                end_angle: end,
            },
            tooltip: TooltipPayload::new(slice.category.clone(), slice.value)
                .with_percentage(percentage_label(slice.value, total)),
            hover: HoverEffect::Opacity(HOVER_OPACITY),
        });
    }

    out.marks.extend(
        LegendSwatches::centered(
            LEGEND_ID_BASE,
            plot,
            LEGEND_INSET,
            LegendItem::from_colors(&colors),
        )
        .with_text_fill(style.text)
        .marks(),
    );
    out
}
