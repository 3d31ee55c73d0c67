//! Built-in named themes.

mod palette;

use crate::theme::Theme;
use crate::tokens::{DimensionSet, FontSet};
use std::fmt::{Display, Formatter};

/// Built-in theme catalog.
///
/// Each preset bundles three color tiers with a single dimension and font
/// tier. The single-tier axes stay constant at every nesting depth via
/// clamp-to-last lookup. `Multi` is the odd one out: its three color tiers
/// deliberately cycle through unrelated hues (orange, violet, blue) instead
/// of shading one family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    Violet,
    Blue,
    Orange,
    Green,
    Magenta,
    Maroon,
    Multi,
}

impl ThemePreset {
    /// Stable preset id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Violet => "violet",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Magenta => "magenta",
            Self::Maroon => "maroon",
            Self::Multi => "multi",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Violet => "Violet",
            Self::Blue => "Blue",
            Self::Orange => "Orange",
            Self::Green => "Green",
            Self::Magenta => "Magenta",
            Self::Maroon => "Maroon",
            Self::Multi => "Multi",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 7] = [
            ThemePreset::Violet,
            ThemePreset::Blue,
            ThemePreset::Orange,
            ThemePreset::Green,
            ThemePreset::Magenta,
            ThemePreset::Maroon,
            ThemePreset::Multi,
        ];
        &PRESETS
    }

    /// Build this preset's theme at level 0.
    pub fn theme(self) -> Theme {
        let (colors, dimen) = match self {
            Self::Violet => (palette::violet(), DimensionSet::violet()),
            Self::Blue => (palette::blue(), DimensionSet::blue()),
            Self::Orange => (palette::orange(), DimensionSet::orange()),
            Self::Green => (palette::green(), DimensionSet::green()),
            Self::Magenta => (palette::magenta(), DimensionSet::magenta()),
            Self::Maroon => (palette::maroon(), DimensionSet::maroon()),
            // Multi cycles hues but keeps the violet geometry.
            Self::Multi => (palette::multi(), DimensionSet::violet()),
        };
        Theme::new(colors, vec![dimen], vec![FontSet::brute()])
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
