// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point (circle marker) mark generation.

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Brush;
use vizboard_core::{Mark, MarkId};

use crate::z_order;

/// Outline of a circle, flattened to cubic segments.
pub fn circle_path(center: Point, radius: f64) -> BezPath {
    Circle::new(center, radius.max(0.0)).to_path(0.1)
}

/// A filled circle marker.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a marker with radius 5.
    pub fn new(id: MarkId, center: Point) -> Self {
        Self {
            id,
            center,
            radius: 5.0,
            fill: Brush::default(),
            z_index: z_order::SERIES_POINTS,
        }
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        Mark::builder(self.id)
            .path(circle_path(self.center, self.radius))
            .z_index(self.z_index)
            .fill(self.fill.clone())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_bounds_follow_radius() {
        let mark = PointMarkSpec::new(MarkId::from_raw(2), Point::new(10.0, 20.0)).mark();
        let b = mark.bounds().unwrap();
        assert!((b.width() - 10.0).abs() < 1e-6);
        assert!((b.center().x - 10.0).abs() < 1e-6);
    }
}
