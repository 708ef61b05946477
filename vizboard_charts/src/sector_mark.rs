// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sector (pie slice) mark generation.
//!
//! Angles are in radians, measured clockwise from 12 o'clock.

use core::time::Duration;

use kurbo::{Point, Vec2};
use peniko::Brush;
use vizboard_core::{Mark, MarkId, SectorTween, Transition, Tween, sector_path};

use crate::z_order;

/// The point midway between the radii at the sector's mid-angle.
pub fn sector_centroid(
    center: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Point {
    let r = 0.5 * (inner_radius + outer_radius);
    let a = 0.5 * (start_angle + end_angle);
    center + Vec2::new(r * a.sin(), -r * a.cos())
}

/// A pie/donut slice.
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// Inner radius (0 for a pie slice).
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle.
    pub start_angle: f64,
    /// End angle.
    pub end_angle: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint and width.
    pub stroke: Option<(Brush, f64)>,
    /// Whole-shape opacity.
    pub opacity: f64,
    /// If set, the slice enters with these `(start, end)` angles and sweeps to its own.
    pub sweep_from: Option<(f64, f64)>,
    /// Sweep duration.
    pub duration: Duration,
    /// Rendering order hint.
    pub z_index: i32,
}

impl SectorMarkSpec {
    /// Creates a new sector mark spec.
    pub fn new(
        id: MarkId,
        center: Point,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            id,
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            fill: Brush::default(),
            stroke: None,
            opacity: 1.0,
            sweep_from: None,
            duration: Duration::ZERO,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = Some((stroke.into(), stroke_width));
        self
    }

    /// Sets the whole-shape opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Animates the slice from the `(start, end)` angle pair to its own over `duration`.
    pub fn with_sweep(mut self, from: (f64, f64), duration: Duration) -> Self {
        self.sweep_from = Some(from);
        self.duration = duration;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// The slice centroid.
    pub fn centroid(&self) -> Point {
        sector_centroid(
            self.center,
            self.inner_radius,
            self.outer_radius,
            self.start_angle,
            self.end_angle,
        )
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let path = sector_path(
            self.center,
            self.inner_radius,
            self.outer_radius,
            self.start_angle,
            self.end_angle,
        );
        let mut builder = Mark::builder(self.id)
            .path(path)
            .z_index(self.z_index)
            .fill(self.fill.clone())
            .opacity(self.opacity);
        if let Some((stroke, width)) = &self.stroke {
            builder = builder.stroke(stroke.clone(), *width);
        }
        if let Some((from_start, from_end)) = self.sweep_from {
            let tween = SectorTween {
                center: self.center,
                inner_radius: self.inner_radius,
                outer_radius: self.outer_radius,
                from_start,
                from_end,
                start_angle: self.start_angle,
                end_angle: self.end_angle,
            };
            builder = builder.transition(Transition::new(self.duration, Tween::Sector(tween)));
        }
        builder.build()
    }
}
