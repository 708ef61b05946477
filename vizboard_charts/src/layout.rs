// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-margin chart layout.
//!
//! The drawing surface is `view`; the plot rectangle is the view inset by [`Margins`]. Axes hang
//! into the bottom and left margins, and the legend sits inside the plot's right edge.

use kurbo::{Point, Rect};

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in scene units.
    pub width: f64,
    /// Height in scene units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    /// Above the plot.
    pub top: f64,
    /// Right of the plot.
    pub right: f64,
    /// Below the plot (bottom axis).
    pub bottom: f64,
    /// Left of the plot (left axis and title).
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 50.0,
            bottom: 50.0,
            left: 60.0,
        }
    }
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer drawing bounds, with the origin at the top-left.
    pub view: Rect,
    /// The plot rectangle in view coordinates.
    pub plot: Rect,
}

impl ChartLayout {
    /// Insets `view` by `margins`. A view smaller than its margins yields an empty plot.
    pub fn arrange(view: Size, margins: Margins) -> Self {
        let width = view.width.max(0.0);
        let height = view.height.max(0.0);
        let x0 = margins.left.max(0.0);
        let y0 = margins.top.max(0.0);
        let x1 = (width - margins.right.max(0.0)).max(x0);
        let y1 = (height - margins.bottom.max(0.0)).max(y0);
        Self {
            view: Rect::new(0.0, 0.0, width, height),
            plot: Rect::new(x0, y0, x1, y1),
        }
    }

    /// Plot width.
    pub fn plot_width(&self) -> f64 {
        self.plot.width()
    }

    /// Plot height.
    pub fn plot_height(&self) -> f64 {
        self.plot.height()
    }

    /// Center of the plot.
    pub fn plot_center(&self) -> Point {
        self.plot.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margins_inset_the_view() {
        let layout = ChartLayout::arrange(Size::new(800.0, 500.0), Margins::default());
        assert_eq!(layout.plot, Rect::new(60.0, 50.0, 750.0, 450.0));
        assert_eq!(layout.plot_width(), 690.0);
        assert_eq!(layout.plot_height(), 400.0);
    }

    #[test]
    fn tiny_views_collapse_the_plot() {
        let layout = ChartLayout::arrange(Size::new(40.0, 40.0), Margins::default());
        assert_eq!(layout.plot_width(), 0.0);
        assert_eq!(layout.plot_height(), 0.0);
    }
}
