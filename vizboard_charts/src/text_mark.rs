// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

use kurbo::Point;
use peniko::Brush;
use vizboard_core::{Mark, MarkId, TextAnchor, TextBaseline, Transition};

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Text rotation angle in degrees, about `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Entry transition, if any.
    pub transition: Option<Transition>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with 12px middle-baseline text.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
            transition: None,
            z_index: crate::z_order::SERIES_LABELS,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the text rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Attaches an entry transition.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut builder = Mark::builder(self.id)
            .text(self.pos, self.text.clone())
            .z_index(self.z_index)
            .font_size(self.font_size)
            .fill(self.fill.clone())
            .anchor(self.anchor)
            .baseline(self.baseline)
            .angle(self.angle);
        if let Some(transition) = &self.transition {
            builder = builder.transition(transition.clone());
        }
        builder.build()
    }
}
