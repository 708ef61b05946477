// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A legend is a vertical list of color swatches with labels to their left, right-aligned
//! against the swatch column.

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use vizboard_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::color::CategoryColors;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A simple legend row item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }

    /// One item per assigned category, in assignment order.
    pub fn from_colors(colors: &CategoryColors) -> Vec<Self> {
        colors
            .categories()
            .iter()
            .filter_map(|c| colors.get(c).map(|color| Self::solid(c.clone(), color)))
            .collect()
    }
}

/// A positioned legend: swatch `i` has its top-left at `(swatch_x, y + i * row_height)`.
///
/// Swatch marks use `id_base + i`; label marks use `id_base + 1000 + i`.
#[derive(Clone, Debug)]
pub struct LegendSwatches {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    pub id_base: u64,
    /// Left edge of the swatch column.
    pub swatch_x: f64,
    /// Top of the first row.
    pub y: f64,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Distance between row tops.
    pub row_height: f64,
    /// Gap between a label's end and its swatch.
    pub label_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Brush,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatches {
    /// A legend in the plot's top-right corner, swatches flush with the right edge.
    pub fn top_right(id_base: u64, plot: Rect, items: Vec<LegendItem>) -> Self {
        let mut legend = Self::at(id_base, Point::new(plot.x1, plot.y0), items);
        legend.swatch_x -= legend.swatch_size;
        legend
    }

    /// A legend whose swatch column starts `inset` left of the plot's right edge, with the
    /// rows centered vertically on the plot.
    pub fn centered(id_base: u64, plot: Rect, inset: f64, items: Vec<LegendItem>) -> Self {
        let mut legend = Self::at(id_base, Point::new(plot.x1 - inset, 0.0), items);
        legend.y = plot.center().y - 0.5 * legend.height();
        legend
    }

    fn at(id_base: u64, origin: Point, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            swatch_x: origin.x,
            y: origin.y,
            swatch_size: 19.0,
            row_height: 20.0,
            label_gap: 5.0,
            font_size: 10.0,
            text_fill: Brush::Solid(css::BLACK),
            items,
        }
    }

    /// Sets the label color.
    pub fn with_text_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.text_fill = fill.into();
        self
    }

    /// Total height of all rows.
    pub fn height(&self) -> f64 {
        self.items.len() as f64 * self.row_height
    }

    /// Generates legend marks (swatch rect + label text per item).
    pub fn marks(&self) -> Vec<Mark> {
        let mut out = Vec::with_capacity(2 * self.items.len());
        for (i, item) in self.items.iter().enumerate() {
            let row_y = self.y + i as f64 * self.row_height;
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + i as u64))
                    .rect(Rect::new(
                        self.swatch_x,
                        row_y,
                        self.swatch_x + self.swatch_size,
                        row_y + self.swatch_size,
                    ))
                    .z_index(z_order::LEGEND_SWATCHES)
                    .fill(item.fill.clone())
                    .build(),
            );
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    Point::new(
                        self.swatch_x - self.label_gap,
                        row_y + 0.5 * self.swatch_size,
                    ),
                    item.label.clone(),
                )
                .with_font_size(self.font_size)
                .with_fill(self.text_fill.clone())
                .with_anchor(TextAnchor::End)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::LEGEND_LABELS)
                .mark(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use vizboard_core::MarkPayload;

    use super::*;

    fn items() -> Vec<LegendItem> {
        vec![
            LegendItem::solid("Product A", css::RED),
            LegendItem::solid("Product B", css::BLUE),
        ]
    }

    #[test]
    fn top_right_rows_step_by_twenty() {
        let plot = Rect::new(60.0, 50.0, 750.0, 450.0);
        let marks = LegendSwatches::top_right(0, plot, items()).marks();
        assert_eq!(marks.len(), 4);
        assert_eq!(
            marks[2].bounds(),
            Some(Rect::new(731.0, 70.0, 750.0, 89.0)),
            "second swatch"
        );
        let MarkPayload::Text(label) = &marks[3].payload else {
            panic!("expected a label");
        };
        assert_eq!(label.text, "Product B");
        assert_eq!(label.pos, Point::new(726.0, 79.5));
        assert_eq!(label.anchor, TextAnchor::End);
        assert_eq!(marks[3].id, MarkId::from_raw(1001));
    }

    #[test]
    fn centered_rows_straddle_the_plot_middle() {
        let plot = Rect::new(60.0, 50.0, 750.0, 450.0);
        let legend = LegendSwatches::centered(0, plot, 80.0, items());
        assert_eq!(legend.swatch_x, 670.0);
        assert_eq!(legend.y, 230.0);
    }
}
