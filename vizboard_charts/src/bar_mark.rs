// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

use core::time::Duration;

use kurbo::Rect;
use peniko::Brush;
use vizboard_core::{Mark, MarkId, Transition, Tween};

use crate::z_order;

/// A single bar (rect mark) that can grow out of a baseline.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Settled geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// If set, the bar enters as a zero-height rect at this y and grows over `duration`.
    pub grow_from: Option<f64>,
    /// Growth duration.
    pub duration: Duration,
    /// Rendering order hint.
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a static bar.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            fill: Brush::default(),
            grow_from: None,
            duration: Duration::ZERO,
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Animates the bar out of a zero-height rect at `baseline`.
    pub fn with_growth(mut self, baseline: f64, duration: Duration) -> Self {
        self.grow_from = Some(baseline);
        self.duration = duration;
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
            .rect(self.rect)
            .z_index(self.z_index)
            .fill(self.fill.clone());
        if let Some(baseline) = self.grow_from {
            let from = Rect::new(self.rect.x0, baseline, self.rect.x1, baseline);
            builder = builder.transition(Transition::new(self.duration, Tween::Rect { from }));
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use vizboard_core::{MarkPayload, Timeline};

    use super::*;

    #[test]
    fn bars_grow_from_the_baseline() {
        let mark = BarMarkSpec::new(MarkId::from_raw(1), Rect::new(10.0, 100.0, 30.0, 400.0))
            .with_growth(400.0, Duration::from_millis(800))
            .mark();
        let mut timeline = Timeline::new();
        timeline.restart([&mark]);

        let MarkPayload::Rect(start) = timeline.sample(&mark) else {
            panic!("expected a rect");
        };
        assert_eq!(start.rect, Rect::new(10.0, 400.0, 30.0, 400.0));

        timeline.advance(Duration::from_millis(400));
        let MarkPayload::Rect(mid) = timeline.sample(&mark) else {
            panic!("expected a rect");
        };
        assert!((mid.rect.y0 - 250.0).abs() < 1e-9, "cubic in-out is halfway at t=0.5");
        assert_eq!(mid.rect.y1, 400.0);

        timeline.advance(Duration::from_millis(400));
        assert_eq!(timeline.sample(&mark), mark.payload);
    }
}
