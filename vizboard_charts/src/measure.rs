// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks.
//!
//! Shaping stays downstream, so layout that depends on text extent (the tooltip box, backend
//! view boxes) goes through a measurer callback.

/// Measured extent of a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Horizontal advance.
    pub advance_width: f64,
    /// Line height.
    pub line_height: f64,
}

/// Measures unshaped text.
pub trait TextMeasurer {
    /// Measures `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> TextMetrics;
}

/// Approximates glyphs as 0.6em wide and lines as 1.2em tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * font_size * text.chars().count() as f64,
            line_height: 1.2 * font_size,
        }
    }
}
