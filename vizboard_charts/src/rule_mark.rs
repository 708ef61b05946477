// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A rule is a stroked open polyline: axis domain lines, tick lines, and pie leader lines.

use kurbo::{BezPath, Point};
use peniko::{Brush, Color};
use smallvec::SmallVec;
use vizboard_core::{Mark, MarkId};

use crate::z_order;

/// A rule mark spec (a stroked polyline, usually two or three points).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Vertices in scene coordinates.
    pub points: SmallVec<[Point; 4]>,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a rule between two points.
    pub fn new(id: MarkId, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::polyline(id, [Point::new(x0, y0), Point::new(x1, y1)])
    }

    /// Creates a rule through `points` in order.
    pub fn polyline(id: MarkId, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            id,
            points: points.into_iter().collect(),
            stroke: Brush::default(),
            stroke_width: 1.0,
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rule mark.
    pub fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            p.move_to(*first);
            for pt in points {
                p.line_to(*pt);
            }
        }
        Mark::builder(self.id)
            .path(p)
            .z_index(self.z_index)
            .fill(Color::TRANSPARENT)
            .stroke(self.stroke.clone(), self.stroke_width)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::PathEl;
    use peniko::color::palette::css;
    use vizboard_core::MarkPayload;

    use super::*;

    #[test]
    fn polyline_keeps_vertex_order() {
        let mark = RuleMarkSpec::polyline(
            MarkId::from_raw(3),
            [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(9.0, 5.0)],
        )
        .with_stroke(css::BLACK, 1.0)
        .mark();
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected a path payload");
        };
        let els: Vec<_> = p.path.elements().to_vec();
        assert_eq!(els.len(), 3);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(els[2], PathEl::LineTo(Point::new(9.0, 5.0)));
        assert_eq!(p.stroke_width, 1.0);
        assert_eq!(p.fill, Brush::Solid(Color::TRANSPARENT));
    }
}
