// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control-panel model.
//!
//! Hosts build their own buttons and checkboxes from this; the widget only says what they show.

use vizboard_charts::{ChartKind, Theme};

/// Interaction hints shown under the controls.
pub const INTERACTION_TIPS: [&str; 3] = [
    "Hover over data points to see details",
    "Use mouse wheel to zoom (bar/line charts)",
    "Click and drag to pan (bar/line charts)",
];

/// One chart-kind button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartKindOption {
    /// The kind it selects.
    pub kind: ChartKind,
    /// Button caption.
    pub label: &'static str,
    /// Whether it is the current kind.
    pub active: bool,
}

/// One category checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    /// Category name.
    pub name: String,
    /// Whether the category is in the filter set.
    pub checked: bool,
}

/// What the controls around a chart display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlPanel {
    /// Chart-kind buttons in display order.
    pub chart_kinds: Vec<ChartKindOption>,
    /// Category checkboxes in first-seen order.
    pub categories: Vec<CategoryOption>,
    /// Caption of the theme toggle, naming the theme it switches to.
    pub theme_toggle: &'static str,
    /// Interaction hints.
    pub tips: [&'static str; 3],
}

impl ControlPanel {
    pub(crate) fn new(
        kind: ChartKind,
        theme: Theme,
        categories: impl IntoIterator<Item = CategoryOption>,
    ) -> Self {
        Self {
            chart_kinds: ChartKind::ALL
                .iter()
                .map(|&k| ChartKindOption {
                    kind: k,
                    label: k.label(),
                    active: k == kind,
                })
                .collect(),
            categories: categories.into_iter().collect(),
            theme_toggle: match theme {
                Theme::Light => "Dark Mode",
                Theme::Dark => "Light Mode",
            },
            tips: INTERACTION_TIPS,
        }
    }
}
