// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart: one bar per record, sorted by value ascending.

use kurbo::{Point, Rect, Vec2};
use vizboard_core::{MarkId, TextAnchor, TextBaseline, Transition, Tween};
use vizboard_data::Record;
use vizboard_data::transform::{SortOrder, sort_by_value};

use crate::axis::{AxisScale, AxisSpec, AxisStyle};
use crate::bar_mark::BarMarkSpec;
use crate::chart::{ChartContext, ChartRender, LEGEND_ID_BASE, X_AXIS_ID_BASE, groups};
use crate::chart::{value_axis, value_scale};
use crate::color::CategoryColors;
use crate::hit::{HitRegion, HitShape, HoverEffect, TooltipPayload};
use crate::legend::{LegendItem, LegendSwatches};
use crate::scale::{ScaleBand, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Opacity of a hovered bar.
pub const HOVER_OPACITY: f64 = 0.8;

/// Band and value scales for value-sorted `records`.
pub fn bar_scales(sorted: &[Record], plot: Rect) -> (ScaleBand, ScaleLinear) {
    let x = ScaleBand::new(sorted.iter().map(|r| r.name.as_str()), (plot.x0, plot.x1))
        .with_padding(0.2);
    (x, value_scale(sorted, plot))
}

/// Value label text; whole numbers print without a fraction.
pub(crate) fn value_label(value: f64) -> String {
    format!("{value}")
}

pub(crate) fn render(records: &[Record], ctx: &ChartContext) -> ChartRender {
    let sorted = sort_by_value(records, SortOrder::Asc);
    let plot = ctx.plot();
    let style = ctx.theme.style();
    let (x, y) = bar_scales(&sorted, plot);
    let colors =
        CategoryColors::from_categories(style.palette, sorted.iter().map(|r| r.category.as_str()));

    let mut out = ChartRender::default();
    out.marks.extend(
        AxisSpec::bottom(X_AXIS_ID_BASE, AxisScale::Band(x.clone()))
            .with_label_angle(-45.0, Vec2::new(-10.0, 0.0))
            .with_label_anchor(TextAnchor::End)
            .with_style(AxisStyle::solid(style.text))
            .marks(plot),
    );
    out.marks.extend(value_axis(y, ctx).marks(plot));

    let band_width = x.band_width();
    for record in &sorted {
        let Some(x0) = x.position(&record.name) else {
            continue;
        };
        let top = y.map(record.value);
        let rect = Rect::new(x0, top, x0 + band_width, plot.y1);
        let color = colors.get(&record.category).unwrap_or(style.text);
        let id = MarkId::for_row(groups::BARS, record.id);

        out.marks.push(
            BarMarkSpec::new(id, rect)
                .with_fill(color)
                .with_growth(plot.y1, ctx.timings.bar())
                .mark(),
        );
        out.marks.push(
            TextMarkSpec::new(
                MarkId::for_row(groups::BAR_LABELS, record.id),
                Point::new(x0 + 0.5 * band_width, top - 5.0),
                value_label(record.value),
            )
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Alphabetic)
            .with_fill(style.text)
            .with_transition(Transition::new(
                ctx.timings.labels(),
                Tween::Opacity { from: 0.0 },
            ))
            .with_z_index(z_order::SERIES_LABELS)
            .mark(),
        );
        out.hits.push(HitRegion {
            mark: id,
            shape: HitShape::Rect(rect),
            tooltip: TooltipPayload::new(record.name.clone(), record.value)
                .with_category(record.category.clone()),
            hover: HoverEffect::Opacity(HOVER_OPACITY),
        });
    }

    out.marks.extend(
        LegendSwatches::top_right(LEGEND_ID_BASE, plot, LegendItem::from_colors(&colors))
            .with_text_fill(style.text)
            .marks(),
    );
    out
}
