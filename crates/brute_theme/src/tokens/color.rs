//! Color token sets

use crate::scheme::ColorScheme;
use brute_core::Color;
use rustc_hash::FxHashMap;

/// The semantic colors for one theme tier under one color scheme.
///
/// Used together, these create the cohesive look of a tier: `foreground` on
/// `background` for plain content, the accent pair for emphasis elements like
/// buttons and highlights, the neutral pair for secondary elements, and
/// `border` for outlines, dividers, and the offset shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorSet {
    /// Primary text and icon color.
    pub foreground: Color,
    /// Primary background color for surfaces.
    pub background: Color,
    /// Text and icon color on accent elements.
    pub accent_foreground: Color,
    /// Background color for accent/emphasis elements.
    pub accent_background: Color,
    /// Text and icon color on neutral elements.
    pub neutral_foreground: Color,
    /// Background color for neutral/secondary elements.
    pub neutral_background: Color,
    /// Color for borders, outlines, and offset shadows.
    pub border: Color,
}

/// The color sets for one theme tier across color schemes.
///
/// A light entry is mandatory; any scheme without its own entry resolves to
/// the light one.
#[derive(Clone, Debug)]
pub struct ColorSchemeSet {
    colors: FxHashMap<ColorScheme, ColorSet>,
}

impl ColorSchemeSet {
    /// Build a scheme set from explicit per-scheme entries.
    ///
    /// Panics if no `ColorScheme::Light` entry is provided. A palette without
    /// a light fallback would degrade silently at lookup time, so this is the
    /// one hard failure in the engine.
    pub fn new(entries: impl IntoIterator<Item = (ColorScheme, ColorSet)>) -> Self {
        let colors: FxHashMap<_, _> = entries.into_iter().collect();
        assert!(
            colors.contains_key(&ColorScheme::Light),
            "ColorSchemeSet must include the light scheme"
        );
        Self { colors }
    }

    /// Convenience constructor for the common light + dark pair.
    pub fn light_dark(light: ColorSet, dark: ColorSet) -> Self {
        Self::new([(ColorScheme::Light, light), (ColorScheme::Dark, dark)])
    }

    /// Convenience constructor for a scheme-invariant tier.
    pub fn light_only(light: ColorSet) -> Self {
        Self::new([(ColorScheme::Light, light)])
    }

    /// The color set for a scheme, falling back to light.
    pub fn color(&self, scheme: ColorScheme) -> ColorSet {
        self.colors
            .get(&scheme)
            .or_else(|| self.colors.get(&ColorScheme::Light))
            .copied()
            .expect("light entry is asserted at construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(bg: Color) -> ColorSet {
        ColorSet {
            foreground: Color::BLACK,
            background: bg,
            accent_foreground: Color::BLACK,
            accent_background: Color::WHITE,
            neutral_foreground: Color::BLACK,
            neutral_background: Color::WHITE,
            border: Color::BLACK,
        }
    }

    #[test]
    fn exact_scheme_wins() {
        let light = set(Color::WHITE);
        let dark = set(Color::BLACK);
        let schemes = ColorSchemeSet::light_dark(light, dark);
        assert_eq!(schemes.color(ColorScheme::Dark), dark);
        assert_eq!(schemes.color(ColorScheme::Light), light);
    }

    #[test]
    fn missing_scheme_falls_back_to_light() {
        let light = set(Color::WHITE);
        let schemes = ColorSchemeSet::light_only(light);
        assert_eq!(schemes.color(ColorScheme::Dark), light);
    }

    #[test]
    #[should_panic(expected = "must include the light scheme")]
    fn dark_only_set_fails_construction() {
        let _ = ColorSchemeSet::new([(ColorScheme::Dark, set(Color::BLACK))]);
    }
}
