// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line chart: one monotone line per category over time, plus a marker per record.

use chrono::NaiveDate;
use kurbo::Point;
use vizboard_core::{MarkId, TextAnchor};
use vizboard_data::Record;
use vizboard_data::transform::{SortOrder, group_by_category, sort_by_date};

use crate::axis::{AxisScale, AxisSpec, AxisStyle};
use crate::chart::{ChartContext, ChartRender, LEGEND_ID_BASE, X_AXIS_ID_BASE, groups};
use crate::chart::{value_axis, value_scale};
use crate::color::CategoryColors;
use crate::hit::{HitRegion, HitShape, HoverEffect, TooltipPayload};
use crate::legend::{LegendItem, LegendSwatches};
use crate::line_mark::LineMarkSpec;
use crate::point_mark::PointMarkSpec;
use crate::scale::ScaleTime;

/// Marker radius at rest.
pub const MARKER_RADIUS: f64 = 5.0;
/// Marker radius while hovered.
pub const HOVER_RADIUS: f64 = 8.0;

/// Date-sorted records with parseable dates; the rest are logged and dropped.
fn dated_records(records: &[Record]) -> Vec<(Record, NaiveDate)> {
    sort_by_date(records, SortOrder::Asc)
        .into_iter()
        .filter_map(|r| match r.parsed_date() {
            Ok(date) => Some((r, date)),
            Err(err) => {
                log::warn!("skipping record {} in line chart: {err}", r.id);
                None
            }
        })
        .collect()
}

pub(crate) fn render(records: &[Record], ctx: &ChartContext) -> ChartRender {
    let dated = dated_records(records);
    let (Some((_, first)), Some((_, last))) = (dated.first(), dated.last()) else {
        return ChartRender::default();
    };
    let plot = ctx.plot();
    let style = ctx.theme.style();
    let kept: Vec<Record> = dated.iter().map(|(r, _)| r.clone()).collect();

    let x = ScaleTime::from_dates(*first, *last, (plot.x0, plot.x1));
    let y = value_scale(&kept, plot);
    let colors =
        CategoryColors::from_categories(style.palette, kept.iter().map(|r| r.category.as_str()));
    let position = |record: &Record| {
        let date = record.parsed_date().ok()?;
        Some(Point::new(x.map_date(date), y.map(record.value)))
    };

    let mut out = ChartRender::default();
    out.marks.extend(
        AxisSpec::bottom(X_AXIS_ID_BASE, AxisScale::Time(x))
            .with_label_anchor(TextAnchor::End)
            .with_style(AxisStyle::solid(style.text))
            .marks(plot),
    );
    out.marks.extend(value_axis(y, ctx).marks(plot));

    for (i, series) in group_by_category(&kept).iter().enumerate() {
        let points: Vec<Point> = series.records.iter().filter_map(&position).collect();
        let color = colors.get(&series.category).unwrap_or(style.text);
        out.marks.push(
            LineMarkSpec::new(MarkId::for_row(groups::LINES, i as u64), points)
                .with_stroke(color, 2.0)
                .with_draw_on(ctx.timings.line())
                .mark(),
        );
    }

    for (record, date) in &dated {
        let center = Point::new(x.map_date(*date), y.map(record.value));
        let id = MarkId::for_row(groups::MARKERS, record.id);
        let color = colors.get(&record.category).unwrap_or(style.text);
        out.marks.push(
            PointMarkSpec::new(id, center)
                .with_radius(MARKER_RADIUS)
                .with_fill(color)
                .mark(),
        );
        out.hits.push(HitRegion {
            mark: id,
            shape: HitShape::Circle {
                center,
                radius: MARKER_RADIUS,
            },
            tooltip: TooltipPayload::new(record.name.clone(), record.value)
                .with_category(record.category.clone())
                .with_date(*date),
            hover: HoverEffect::Radius {
                center,
                radius: HOVER_RADIUS,
            },
        });
    }

    out.marks.extend(
        LegendSwatches::top_right(LEGEND_ID_BASE, plot, LegendItem::from_colors(&colors))
            .with_text_fill(style.text)
            .marks(),
    );
    out
}
