// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration.

use kurbo::Vec2;
use vizboard_charts::{Margins, TransitionTimings};

use crate::error::{Result, WidgetError};

/// Sizing, animation, and interaction settings for a [`ChartWidget`](crate::ChartWidget).
///
/// Every field has a default, so a partial configuration (or, with the `serde` feature, a
/// partial JSON object) only names what it changes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WidgetConfig {
    /// Initial drawing width.
    pub width: f64,
    /// Drawing height; resizing never changes it.
    pub height: f64,
    /// Floor applied to the container width on resize.
    pub min_width: f64,
    /// Space between the drawing edge and the plot area.
    pub margins: Margins,
    /// Entry animation lengths.
    pub timings: TransitionTimings,
    /// Zoom scale clamp, `(min, max)`.
    pub zoom_extent: (f64, f64),
    /// Tooltip placement relative to the pointer, `(dx, dy)`.
    pub tooltip_offset: (f64, f64),
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            min_width: 600.0,
            margins: Margins::default(),
            timings: TransitionTimings::default(),
            zoom_extent: (0.5, 5.0),
            tooltip_offset: (10.0, -10.0),
        }
    }
}

impl WidgetConfig {
    /// Sets the initial width and the fixed height.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the resize floor.
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    /// Sets the plot margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the entry animation lengths.
    pub fn with_timings(mut self, timings: TransitionTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Sets the zoom scale clamp.
    pub fn with_zoom_extent(mut self, min: f64, max: f64) -> Self {
        self.zoom_extent = (min, max);
        self
    }

    /// Sets the tooltip offset from the pointer.
    pub fn with_tooltip_offset(mut self, dx: f64, dy: f64) -> Self {
        self.tooltip_offset = (dx, dy);
        self
    }

    /// The tooltip offset as a vector.
    pub fn tooltip_offset(&self) -> Vec2 {
        Vec2::new(self.tooltip_offset.0, self.tooltip_offset.1)
    }

    /// The width actually drawn for a container `width` wide.
    pub fn clamp_width(&self, width: f64) -> f64 {
        width.max(self.min_width)
    }

    /// Checks that sizes are positive and the zoom extent is ordered.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(WidgetError::Config(format!("{name} must be positive, got {v}")))
            }
        };
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("min_width", self.min_width)?;

        let m = self.margins;
        if [m.top, m.right, m.bottom, m.left]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(WidgetError::Config(format!(
                "margins must be non-negative, got {m:?}"
            )));
        }

        let (lo, hi) = self.zoom_extent;
        positive("zoom_extent.0", lo)?;
        positive("zoom_extent.1", hi)?;
        if lo > hi {
            return Err(WidgetError::Config(format!(
                "zoom_extent is inverted: ({lo}, {hi})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WidgetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.clamp_width(320.0), 600.0);
        assert_eq!(config.clamp_width(1024.0), 1024.0);
        assert_eq!(config.tooltip_offset(), Vec2::new(10.0, -10.0));
    }

    #[test]
    fn rejects_bad_values() {
        let zero = WidgetConfig::default().with_size(0.0, 500.0);
        assert!(matches!(zero.validate(), Err(WidgetError::Config(_))));

        let inverted = WidgetConfig::default().with_zoom_extent(5.0, 0.5);
        let err = inverted.validate().unwrap_err();
        assert!(err.to_string().contains("inverted"), "{err}");

        let margins = Margins {
            left: -1.0,
            ..Margins::default()
        };
        assert!(WidgetConfig::default().with_margins(margins).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{"height": 400.0, "timings": {"line_ms": 500}}"#).unwrap();
        assert_eq!(config.height, 400.0);
        assert_eq!(config.width, 800.0);
        assert_eq!(config.timings.line_ms, 500);
        assert_eq!(config.timings.bar_ms, 800);
        assert_eq!(config.margins, Margins::default());
    }
}
