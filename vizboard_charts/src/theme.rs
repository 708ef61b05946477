// Copyright 2025 the Vizboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use peniko::Color;

use crate::color::{SET1, SET2};

/// Light or dark presentation. Only colors change between themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Both themes.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name, also used as the SVG class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Colors for this theme.
    pub fn style(self) -> ThemeStyle {
        match self {
            Self::Light => ThemeStyle {
                background: Color::from_rgb8(0xff, 0xff, 0xff),
                text: Color::from_rgb8(0x33, 0x33, 0x33),
                slice_stroke: Color::from_rgb8(0xff, 0xff, 0xff),
                tooltip_background: Color::from_rgb8(0xff, 0xff, 0xff),
                tooltip_border: Color::from_rgb8(0xdd, 0xdd, 0xdd),
                palette: &SET1,
            },
            Self::Dark => ThemeStyle {
                background: Color::from_rgb8(0x22, 0x22, 0x22),
                text: Color::from_rgb8(0xdd, 0xdd, 0xdd),
                slice_stroke: Color::from_rgb8(0x22, 0x22, 0x22),
                tooltip_background: Color::from_rgb8(0x33, 0x33, 0x33),
                tooltip_border: Color::from_rgb8(0x55, 0x55, 0x55),
                palette: &SET2,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown theme name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseThemeError(pub String);

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme `{}`", self.0)
    }
}

impl core::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Resolved colors for a theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeStyle {
    /// Page background behind the chart.
    pub background: Color,
    /// Axis lines, tick labels, titles, legend labels, and pie leader lines.
    pub text: Color,
    /// Outline between pie slices.
    pub slice_stroke: Color,
    /// Tooltip panel fill.
    pub tooltip_background: Color,
    /// Tooltip panel outline.
    pub tooltip_border: Color,
    /// Ordinal category palette.
    pub palette: &'static [Color],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_eq!(Theme::Light.style().palette.len(), 9);
        assert_eq!(Theme::Dark.style().palette.len(), 8);
    }
}
