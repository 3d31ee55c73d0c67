//! The leveled theme aggregate

use crate::scheme::ColorScheme;
use crate::tokens::{ColorSchemeSet, ColorSet, DimensionSet, FontSet};
use std::sync::Arc;

/// A theme: a current nesting level plus three independently-indexed tier
/// sequences.
///
/// The sequences need not have equal length. A named theme typically supplies
/// three color tiers but a single dimension and font tier, meaning colors
/// vary with nesting depth while geometry and typography stay constant.
/// Lookups past the end of a sequence clamp to its last entry.
///
/// Sequences are `Arc`-shared: [`Theme::leveled`] produces a new value with a
/// shifted level and the same storage, so deriving a child scope allocates
/// nothing beyond the handle clones.
#[derive(Clone, Debug)]
pub struct Theme {
    level: usize,
    colors: Arc<[ColorSchemeSet]>,
    dimensions: Arc<[DimensionSet]>,
    fonts: Arc<[FontSet]>,
}

impl Theme {
    /// Build a theme at level 0 from its tier sequences.
    ///
    /// Panics if any sequence is empty: a theme with no tiers on an axis is a
    /// theme-authoring bug and must not degrade into blank styling.
    pub fn new(
        colors: Vec<ColorSchemeSet>,
        dimensions: Vec<DimensionSet>,
        fonts: Vec<FontSet>,
    ) -> Self {
        assert!(
            !colors.is_empty(),
            "Theme must include at least one ColorSchemeSet"
        );
        assert!(
            !dimensions.is_empty(),
            "Theme must include at least one DimensionSet"
        );
        assert!(!fonts.is_empty(), "Theme must include at least one FontSet");

        Self {
            level: 0,
            colors: colors.into(),
            dimensions: dimensions.into(),
            fonts: fonts.into(),
        }
    }

    /// The current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// The color set at the current level for a scheme.
    pub fn color(&self, scheme: ColorScheme) -> ColorSet {
        self.color_at(self.level, scheme)
    }

    /// The color set at an explicit level for a scheme.
    pub fn color_at(&self, level: usize, scheme: ColorScheme) -> ColorSet {
        clamped(&self.colors, level).color(scheme)
    }

    /// The dimension set at the current level.
    pub fn dimen(&self) -> DimensionSet {
        self.dimen_at(self.level)
    }

    /// The dimension set at an explicit level.
    pub fn dimen_at(&self, level: usize) -> DimensionSet {
        *clamped(&self.dimensions, level)
    }

    /// The font set at the current level.
    pub fn font(&self) -> FontSet {
        self.font_at(self.level)
    }

    /// The font set at an explicit level.
    pub fn font_at(&self, level: usize) -> FontSet {
        *clamped(&self.fonts, level)
    }

    /// A theme at `level + amount`, clamped at zero, sharing this theme's
    /// tier sequences. `leveled(0)` is an identity on the level.
    pub fn leveled(&self, amount: i32) -> Theme {
        let level = (self.level as i64 + amount as i64).max(0) as usize;
        Theme {
            level,
            colors: Arc::clone(&self.colors),
            dimensions: Arc::clone(&self.dimensions),
            fonts: Arc::clone(&self.fonts),
        }
    }
}

/// Clamp-to-last sequence lookup. Total for every index given a non-empty
/// slice, which the `Theme` constructor guarantees.
fn clamped<T>(seq: &[T], index: usize) -> &T {
    seq.get(index).unwrap_or_else(|| {
        seq.last()
            .expect("theme sequences are non-empty by construction")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use brute_core::Color;

    fn color_set(bg: Color) -> ColorSet {
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

    fn three_tier_theme() -> Theme {
        Theme::new(
            vec![
                ColorSchemeSet::light_only(color_set(Color::from_hex(0x000000))),
                ColorSchemeSet::light_only(color_set(Color::from_hex(0x010101))),
                ColorSchemeSet::light_only(color_set(Color::from_hex(0x020202))),
            ],
            vec![DimensionSet::violet()],
            vec![FontSet::brute()],
        )
    }

    #[test]
    fn lookup_within_bounds_is_exact() {
        let theme = three_tier_theme();
        for level in 0..3 {
            assert_eq!(
                theme.color_at(level, ColorScheme::Light).background,
                Color::from_hex(0x010101 * level as u32)
            );
        }
    }

    #[test]
    fn lookup_past_the_end_clamps_to_last() {
        let theme = three_tier_theme();
        let last = theme.color_at(2, ColorScheme::Light);
        for level in 3..40 {
            assert_eq!(theme.color_at(level, ColorScheme::Light), last);
        }
        // Single-element sequences clamp trivially.
        assert_eq!(theme.dimen_at(17), DimensionSet::violet());
        assert_eq!(theme.font_at(17), FontSet::brute());
    }

    #[test]
    fn leveled_clamps_at_zero() {
        let theme = three_tier_theme();
        assert_eq!(theme.leveled(2).level(), 2);
        assert_eq!(theme.leveled(-1).level(), 0);
        assert_eq!(theme.leveled(2).leveled(-5).level(), 0);
    }

    #[test]
    fn leveled_zero_is_identity_and_shares_storage() {
        let theme = three_tier_theme().leveled(1);
        let same = theme.leveled(0);
        assert_eq!(same.level(), theme.level());
        assert!(Arc::ptr_eq(&same.colors, &theme.colors));
        assert!(Arc::ptr_eq(&same.dimensions, &theme.dimensions));
        assert!(Arc::ptr_eq(&same.fonts, &theme.fonts));
    }

    #[test]
    #[should_panic(expected = "at least one ColorSchemeSet")]
    fn empty_color_sequence_fails_construction() {
        let _ = Theme::new(vec![], vec![DimensionSet::violet()], vec![FontSet::brute()]);
    }

    #[test]
    #[should_panic(expected = "at least one DimensionSet")]
    fn empty_dimension_sequence_fails_construction() {
        let _ = Theme::new(
            vec![ColorSchemeSet::light_only(color_set(Color::WHITE))],
            vec![],
            vec![FontSet::brute()],
        );
    }

    #[test]
    #[should_panic(expected = "at least one FontSet")]
    fn empty_font_sequence_fails_construction() {
        let _ = Theme::new(
            vec![ColorSchemeSet::light_only(color_set(Color::WHITE))],
            vec![DimensionSet::violet()],
            vec![],
        );
    }
}
