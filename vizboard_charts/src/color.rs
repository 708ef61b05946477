// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordinal category colors.

use peniko::Color;

/// ColorBrewer Set1, the light theme palette.
pub const SET1: [Color; 9] = [
    Color::from_rgb8(0xe4, 0x1a, 0x1c),
    Color::from_rgb8(0x37, 0x7e, 0xb8),
    Color::from_rgb8(0x4d, 0xaf, 0x4a),
    Color::from_rgb8(0x98, 0x4e, 0xa3),
    Color::from_rgb8(0xff, 0x7f, 0x00),
    Color::from_rgb8(0xff, 0xff, 0x33),
    Color::from_rgb8(0xa6, 0x56, 0x28),
    Color::from_rgb8(0xf7, 0x81, 0xbf),
    Color::from_rgb8(0x99, 0x99, 0x99),
];

/// ColorBrewer Set2, the dark theme palette.
pub const SET2: [Color; 8] = [
    Color::from_rgb8(0x66, 0xc2, 0xa5),
    Color::from_rgb8(0xfc, 0x8d, 0x62),
    Color::from_rgb8(0x8d, 0xa0, 0xcb),
    Color::from_rgb8(0xe7, 0x8a, 0xc3),
    Color::from_rgb8(0xa6, 0xd8, 0x54),
    Color::from_rgb8(0xff, 0xd9, 0x2f),
    Color::from_rgb8(0xe5, 0xc4, 0x94),
    Color::from_rgb8(0xb3, 0xb3, 0xb3),
];

/// An ordinal mapping from category names to palette colors.
///
/// Categories take palette entries in the order they are first seen, wrapping around when there
/// are more categories than colors. Lookup order never depends on hashing.
#[derive(Clone, Debug)]
pub struct CategoryColors {
    palette: &'static [Color],
    assigned: Vec<String>,
}

impl CategoryColors {
    /// Creates an empty mapping over `palette`.
    pub fn new(palette: &'static [Color]) -> Self {
        Self {
            palette,
            assigned: Vec::new(),
        }
    }

    /// Creates a mapping and assigns `categories` in order.
    pub fn from_categories<S: AsRef<str>>(
        palette: &'static [Color],
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut colors = Self::new(palette);
        for c in categories {
            colors.assign(c.as_ref());
        }
        colors
    }

    /// Returns the color for `category`, assigning the next palette entry if it is new.
    pub fn assign(&mut self, category: &str) -> Color {
        let index = match self.assigned.iter().position(|c| c == category) {
            Some(i) => i,
            None => {
                self.assigned.push(category.to_owned());
                self.assigned.len() - 1
            }
        };
        self.color_at(index)
    }

    /// Returns the color for an assigned `category`.
    pub fn get(&self, category: &str) -> Option<Color> {
        self.assigned
            .iter()
            .position(|c| c == category)
            .map(|i| self.color_at(i))
    }

    /// Assigned categories in assignment order.
    pub fn categories(&self) -> &[String] {
        &self.assigned
    }

    fn color_at(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return Color::BLACK;
        }
        self.palette[index % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_order_wins() {
        let colors = CategoryColors::from_categories(&SET1, ["b", "a", "b"]);
        assert_eq!(colors.categories(), ["b", "a"]);
        assert_eq!(colors.get("b"), Some(SET1[0]));
        assert_eq!(colors.get("a"), Some(SET1[1]));
        assert_eq!(colors.get("zzz"), None);
    }

    #[test]
    fn palette_wraps() {
        let names: Vec<String> = (0..10).map(|i| format!("c{i}")).collect();
        let colors = CategoryColors::from_categories(&SET2, &names);
        assert_eq!(colors.get("c8"), Some(SET2[0]));
        assert_eq!(colors.get("c9"), Some(SET2[1]));
    }
}
