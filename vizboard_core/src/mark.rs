// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark descriptors.
//!
//! A [`Mark`] is a single shape (rectangle, path, or text run) with its resolved geometry and
//! style. Chart code produces lists of marks; the [`crate::Scene`] reconciles them and a drawing
//! backend paints the result.

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;
use peniko::color::palette::css;

use crate::transition::Transition;

/// Stable identity for a mark across render passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    const ROW_FLAG: u64 = 1 << 63;

    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives an id for one row of a data-bound mark group.
    ///
    /// `group` distinguishes independent mark families (bars, labels, markers); `row_key` is the
    /// stable key of the row within that family. Row ids never collide with ids below `2^63`.
    pub const fn for_row(group: u16, row_key: u64) -> Self {
        Self(Self::ROW_FLAG | ((group as u64) << 40) | (row_key & 0xFF_FFFF_FFFF))
    }
}

/// The shape family of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// An arbitrary path (lines, curves, sectors, circles).
    Path,
    /// A single line of unshaped text.
    Text,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor point is the start of the text.
    #[default]
    Start,
    /// The anchor point is the middle of the text.
    Middle,
    /// The anchor point is the end of the text.
    End,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Anchor at the alphabetic baseline.
    #[default]
    Alphabetic,
    /// Anchor at the vertical middle of the em box.
    Middle,
    /// Anchor at the top (hanging baseline).
    Hanging,
}

/// A stroke dash pattern: one dash and one gap, shifted by `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    /// Dash length.
    pub dash: f64,
    /// Gap length.
    pub gap: f64,
    /// Offset into the pattern at the path start.
    pub offset: f64,
}

impl Dash {
    /// A single dash covering `length`, followed by an equal gap, with the given offset.
    ///
    /// With `offset == length` the path is fully hidden; with `offset == 0` it is fully shown.
    pub fn reveal(length: f64, offset: f64) -> Self {
        Self {
            dash: length,
            gap: length,
            offset,
        }
    }
}

/// Resolved rectangle geometry and style.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Whole-shape opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Resolved path geometry and style.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint (transparent for open polylines).
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables stroking.
    pub stroke_width: f64,
    /// Optional dash pattern.
    pub dash: Option<Dash>,
    /// Whole-shape opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Resolved text placement and style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Whole-shape opacity in `[0, 1]`.
    pub opacity: f64,
}

/// The resolved visual content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// Rectangle payload.
    Rect(RectPayload),
    /// Path payload.
    Path(PathPayload),
    /// Text payload.
    Text(TextPayload),
}

impl MarkPayload {
    /// Returns the shape family of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns the geometric bounds, if they can be computed without text metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }

    /// Returns the whole-shape opacity.
    pub fn opacity(&self) -> f64 {
        match self {
            Self::Rect(r) => r.opacity,
            Self::Path(p) => p.opacity,
            Self::Text(t) => t.opacity,
        }
    }

    /// Sets the whole-shape opacity.
    pub fn set_opacity(&mut self, opacity: f64) {
        let opacity = opacity.clamp(0.0, 1.0);
        match self {
            Self::Rect(r) => r.opacity = opacity,
            Self::Path(p) => p.opacity = opacity,
            Self::Text(t) => t.opacity = opacity,
        }
    }
}

/// A shape descriptor with identity, paint order, and an optional entry transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint order; higher values paint later. Ties break on `id`.
    pub z_index: i32,
    /// Settled visual content.
    pub payload: MarkPayload,
    /// Transition played when the mark enters the scene.
    pub transition: Option<Transition>,
}

impl Mark {
    /// Starts building a mark with the given id.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the shape family of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns the bounds of the settled payload, if known.
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}

/// Builder for [`Mark`].
///
/// The builder starts as an empty rectangle. Style setters that do not apply to the current
/// payload kind are ignored (for example `font_size` on a rectangle).
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    z_index: i32,
    payload: MarkPayload,
    transition: Option<Transition>,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            z_index: 0,
            payload: MarkPayload::Rect(RectPayload {
                rect: Rect::ZERO,
                fill: Brush::default(),
                opacity: 1.0,
            }),
            transition: None,
        }
    }

    /// Makes this a rectangle mark.
    pub fn rect(mut self, rect: Rect) -> Self {
        let fill = self.fill_brush();
        self.payload = MarkPayload::Rect(RectPayload {
            rect,
            fill,
            opacity: self.payload.opacity(),
        });
        self
    }

    /// Makes this a path mark, unstroked until [`MarkBuilder::stroke`] is called.
    pub fn path(mut self, path: BezPath) -> Self {
        let fill = self.fill_brush();
        self.payload = MarkPayload::Path(PathPayload {
            path,
            fill,
            stroke: Brush::Solid(css::BLACK),
            stroke_width: 0.0,
            dash: None,
            opacity: self.payload.opacity(),
        });
        self
    }

    /// Makes this a text mark at `pos` with 12px start-anchored alphabetic text.
    pub fn text(mut self, pos: Point, text: impl Into<String>) -> Self {
        let fill = self.fill_brush();
        self.payload = MarkPayload::Text(TextPayload {
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill,
            opacity: self.payload.opacity(),
        });
        self
    }

    fn fill_brush(&self) -> Brush {
        match &self.payload {
            MarkPayload::Rect(r) => r.fill.clone(),
            MarkPayload::Path(p) => p.fill.clone(),
            MarkPayload::Text(t) => t.fill.clone(),
        }
    }

    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the fill paint.
    pub fn fill(mut self, fill: impl Into<Brush>) -> Self {
        let fill = fill.into();
        match &mut self.payload {
            MarkPayload::Rect(r) => r.fill = fill,
            MarkPayload::Path(p) => p.fill = fill,
            MarkPayload::Text(t) => t.fill = fill,
        }
        self
    }

    /// Sets the stroke paint and width (paths only).
    pub fn stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        if let MarkPayload::Path(p) = &mut self.payload {
            p.stroke = stroke.into();
            p.stroke_width = stroke_width;
        }
        self
    }

    /// Sets a dash pattern (paths only).
    pub fn dash(mut self, dash: Dash) -> Self {
        if let MarkPayload::Path(p) = &mut self.payload {
            p.dash = Some(dash);
        }
        self
    }

    /// Sets the whole-shape opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.payload.set_opacity(opacity);
        self
    }

    /// Sets the font size (text only).
    pub fn font_size(mut self, font_size: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.font_size = font_size;
        }
        self
    }

    /// Sets the rotation angle in degrees (text only).
    pub fn angle(mut self, angle: f64) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.angle = angle;
        }
        self
    }

    /// Sets the horizontal anchor (text only).
    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.anchor = anchor;
        }
        self
    }

    /// Sets the vertical baseline (text only).
    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        if let MarkPayload::Text(t) = &mut self.payload {
            t.baseline = baseline;
        }
        self
    }

    /// Attaches an entry transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Finishes the mark.
    pub fn build(self) -> Mark {
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload: self.payload,
            transition: self.transition,
        }
    }
}
