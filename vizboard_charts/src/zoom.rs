// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan/zoom state for cartesian charts.
//!
//! A [`ZoomTransform`] maps scene points to view points as `p * k + (x, y)`. It is applied to the
//! whole plotted group and never feeds back into scale domains.

use kurbo::{Affine, Point, Vec2};

/// A uniform scale followed by a translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    /// Scale factor.
    pub k: f64,
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
}

impl ZoomTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Maps a scene point to the view.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.k + self.x, p.y * self.k + self.y)
    }

    /// Maps a view point back to the scene.
    pub fn invert(&self, p: Point) -> Point {
        Point::new((p.x - self.x) / self.k, (p.y - self.y) / self.k)
    }

    /// Returns `true` for the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// The equivalent affine.
    pub fn to_affine(&self) -> Affine {
        Affine::new([self.k, 0.0, 0.0, self.k, self.x, self.y])
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WheelDeltaMode {
    /// Pixels.
    #[default]
    Pixel,
    /// Lines.
    Line,
    /// Pages.
    Page,
}

impl WheelDeltaMode {
    /// Exponent factor per delta unit.
    fn factor(self) -> f64 {
        match self {
            Self::Pixel => 0.002,
            Self::Line => 0.05,
            Self::Page => 1.0,
        }
    }
}

/// Wheel zoom and drag pan over a [`ZoomTransform`], with the scale clamped to an extent.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomBehavior {
    transform: ZoomTransform,
    scale_extent: (f64, f64),
    drag_anchor: Option<Point>,
}

impl ZoomBehavior {
    /// Creates an identity behavior clamping the scale to `[min, max]`.
    pub fn new(scale_extent: (f64, f64)) -> Self {
        Self {
            transform: ZoomTransform::IDENTITY,
            scale_extent,
            drag_anchor: None,
        }
    }

    /// The current transform.
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// The scale clamp range.
    pub fn scale_extent(&self) -> (f64, f64) {
        self.scale_extent
    }

    /// Zooms by a wheel `delta_y` keeping the scene point under `pointer` fixed.
    ///
    /// Returns `true` if the transform changed.
    pub fn wheel(&mut self, pointer: Point, delta_y: f64, mode: WheelDeltaMode) -> bool {
        let t = self.transform;
        let (lo, hi) = self.scale_extent;
        let k = (t.k * 2_f64.powf(-delta_y * mode.factor())).clamp(lo, hi);
        if !k.is_finite() || k == t.k {
            return false;
        }
        let anchor = t.invert(pointer);
        self.transform = ZoomTransform {
            k,
            x: pointer.x - anchor.x * k,
            y: pointer.y - anchor.y * k,
        };
        true
    }

    /// Starts a drag gesture at `pointer`.
    pub fn drag_start(&mut self, pointer: Point) {
        self.drag_anchor = Some(pointer);
    }

    /// Moves an active drag to `pointer`, translating by the pointer delta.
    ///
    /// Returns `true` if the transform changed.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        let delta: Vec2 = pointer - anchor;
        self.drag_anchor = Some(pointer);
        if delta == Vec2::ZERO {
            return false;
        }
        self.transform.x += delta.x;
        self.transform.y += delta.y;
        true
    }

    /// Ends a drag gesture.
    pub fn drag_end(&mut self) {
        self.drag_anchor = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Drops any gesture and returns to the identity transform.
    pub fn reset(&mut self) {
        self.transform = ZoomTransform::IDENTITY;
        self.drag_anchor = None;
    }
}
