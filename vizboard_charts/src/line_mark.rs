// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

use core::time::Duration;

use kurbo::{BezPath, ParamCurveArclen, Point};
use peniko::{Brush, Color};
use vizboard_core::{Mark, MarkId, Transition, Tween};

use crate::curve::monotone_x;
use crate::z_order;

/// Arc-length accuracy used when sizing draw-on dashes.
const ARCLEN_ACCURACY: f64 = 1e-3;

/// Total arc length of `path`.
pub fn path_length(path: &BezPath) -> f64 {
    path.segments()
        .map(|seg| seg.arclen(ARCLEN_ACCURACY))
        .sum()
}

/// How a line joins its points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Straight segments.
    Linear,
    /// Monotone cubic in x.
    #[default]
    MonotoneX,
}

/// A stroked line through a series of points.
///
/// This generates a single path mark.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Points in ascending x order.
    pub points: Vec<Point>,
    /// Interpolation between points.
    pub interpolation: Interpolation,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width.
    pub stroke_width: f64,
    /// If set, the line is revealed from its start over this duration.
    pub draw_on: Option<Duration>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a 2px monotone line.
    pub fn new(id: MarkId, points: Vec<Point>) -> Self {
        Self {
            id,
            points,
            interpolation: Interpolation::MonotoneX,
            stroke: Brush::Solid(Color::BLACK),
            stroke_width: 2.0,
            draw_on: None,
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// Sets the interpolation.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Reveals the line over `duration`.
    pub fn with_draw_on(mut self, duration: Duration) -> Self {
        self.draw_on = Some(duration);
        self
    }

    /// The interpolated path.
    pub fn path(&self) -> BezPath {
        match self.interpolation {
            Interpolation::MonotoneX => monotone_x(&self.points),
            Interpolation::Linear => {
                let mut p = BezPath::new();
                for (i, pt) in self.points.iter().enumerate() {
                    if i == 0 {
                        p.move_to(*pt);
                    } else {
                        p.line_to(*pt);
                    }
                }
                p
            }
        }
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let path = self.path();
        let length = path_length(&path);
        let mut builder = Mark::builder(self.id)
            .path(path)
            .z_index(self.z_index)
            .fill(Color::TRANSPARENT)
            .stroke(self.stroke.clone(), self.stroke_width);
        if let Some(duration) = self.draw_on {
            builder = builder.transition(Transition::new(duration, Tween::DrawOn { length }));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use vizboard_core::{MarkPayload, Timeline};

    use super::*;

    #[test]
    fn straight_length_is_exact() {
        let spec = LineMarkSpec::new(
            MarkId::from_raw(1),
            vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 0.0)],
        )
        .with_interpolation(Interpolation::Linear);
        assert!((path_length(&spec.path()) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn draw_on_shrinks_the_dash_offset() {
        let mark = LineMarkSpec::new(
            MarkId::from_raw(1),
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        )
        .with_draw_on(Duration::from_millis(2000))
        .mark();
        let mut timeline = Timeline::new();
        timeline.restart([&mark]);
        timeline.advance(Duration::from_millis(500));
        let MarkPayload::Path(p) = timeline.sample(&mark) else {
            panic!("expected a path");
        };
        let dash = p.dash.unwrap();
        assert!((dash.dash - 100.0).abs() < 1e-6);
        // Cubic in-out at a quarter of the way has revealed 6.25%.
        assert!((dash.offset - 93.75).abs() < 1e-6);
    }
}
