// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover hit regions.
//!
//! Renderers emit one [`HitRegion`] per hoverable mark. A region knows its settled shape, the
//! tooltip it reports, and how its mark looks while hovered. Regions are tested in reverse
//! emission order so the mark painted last wins.

use core::f64::consts::TAU;

use chrono::NaiveDate;
use kurbo::{Point, Rect};
use vizboard_core::{MarkId, MarkPayload};

use crate::point_mark::circle_path;
use crate::sector_mark::sector_centroid;

/// Hoverable geometry in scene coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitShape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A disc.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
    },
    /// An annular sector; angles are clockwise from 12 o'clock.
    Sector {
        /// Center.
        center: Point,
        /// Inner radius.
        inner_radius: f64,
        /// Outer radius.
        outer_radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
    },
}

impl HitShape {
    /// Returns `true` if `p` lies inside the shape (edges included).
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            Self::Rect(r) => p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1,
            Self::Circle { center, radius } => (p - center).hypot2() <= radius * radius,
            Self::Sector {
                center,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
            } => {
                let d = p - center;
                let r = d.hypot();
                if r < inner_radius || r > outer_radius {
                    return false;
                }
                let angle = d.x.atan2(-d.y).rem_euclid(TAU);
                angle >= start_angle && angle < end_angle
            }
        }
    }

    /// A representative interior point: the rect or circle center, or the sector centroid.
    pub fn center(&self) -> Point {
        match *self {
            Self::Rect(r) => r.center(),
            Self::Circle { center, .. } => center,
            Self::Sector {
                center,
                inner_radius,
                outer_radius,
                start_angle,
                end_angle,
            } => sector_centroid(center, inner_radius, outer_radius, start_angle, end_angle),
        }
    }
}

/// What the tooltip shows for a hovered mark.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipPayload {
    /// Record or category name.
    pub name: String,
    /// Record value or category sum.
    pub value: f64,
    /// Category, for bar and line marks.
    pub category: Option<String>,
    /// Record date, for line markers.
    pub date: Option<NaiveDate>,
    /// Share of the total to one decimal (`"62.5"`), for pie slices.
    pub percentage: Option<String>,
    /// Pointer position in view coordinates when the hover began.
    pub screen: Point,
}

impl TooltipPayload {
    /// A payload with only a name and value.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            category: None,
            date: None,
            percentage: None,
            screen: Point::ZERO,
        }
    }

    /// Sets the category line.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the date line.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the percentage line.
    pub fn with_percentage(mut self, percentage: impl Into<String>) -> Self {
        self.percentage = Some(percentage.into());
        self
    }

    /// Copies the payload, anchored at `screen`.
    #[must_use]
    pub fn at(&self, screen: Point) -> Self {
        Self {
            screen,
            ..self.clone()
        }
    }
}

/// How a hovered mark changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HoverEffect {
    /// Sets whole-shape opacity.
    Opacity(f64),
    /// Redraws a circle marker at a new radius.
    Radius {
        /// Marker center.
        center: Point,
        /// Hovered radius.
        radius: f64,
    },
}

impl HoverEffect {
    /// Applies the hovered look to `payload`.
    pub fn apply(&self, payload: &mut MarkPayload) {
        match *self {
            Self::Opacity(opacity) => payload.set_opacity(opacity),
            Self::Radius { center, radius } => {
                if let MarkPayload::Path(p) = payload {
                    p.path = circle_path(center, radius);
                }
            }
        }
    }
}

/// A hoverable mark.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRegion {
    /// The mark the region belongs to.
    pub mark: MarkId,
    /// Hoverable geometry.
    pub shape: HitShape,
    /// Tooltip content; `screen` is filled in on hover.
    pub tooltip: TooltipPayload,
    /// Hovered look.
    pub hover: HoverEffect,
}

/// Returns the topmost region containing `p`.
pub fn hit_test(regions: &[HitRegion], p: Point) -> Option<&HitRegion> {
    regions.iter().rev().find(|r| r.shape.contains(p))
}
