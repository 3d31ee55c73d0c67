//! Catalog-level checks over the built-in presets.

use brute_core::Vec2;
use brute_theme::{ColorScheme, ThemeEnv, ThemePreset};
use std::collections::HashSet;

#[test]
fn catalog_lists_every_preset() {
    assert_eq!(ThemePreset::all().len(), 7);
    let ids: HashSet<_> = ThemePreset::all().iter().map(|p| p.id()).collect();
    assert_eq!(ids.len(), 7, "preset ids must be unique");
}

#[test]
fn every_preset_builds_at_level_zero() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        assert_eq!(theme.level(), 0, "{preset} should start at level 0");
    }
}

#[test]
fn display_name_matches_display_impl() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.to_string(), preset.display_name());
    }
}

#[test]
fn color_tiers_differ_while_dimensions_hold() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let base = theme.color(ColorScheme::Light);
        let nested = theme.leveled(1);
        assert_ne!(
            base.background,
            nested.color(ColorScheme::Light).background,
            "{preset} tier 1 background should differ from tier 0"
        );
        // Single dimension tier clamps, so geometry is depth-invariant.
        assert_eq!(theme.dimen(), nested.dimen());
        assert_eq!(theme.font(), nested.font());
    }
}

#[test]
fn dark_scheme_has_distinct_backgrounds() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        assert_ne!(
            theme.color(ColorScheme::Light).background,
            theme.color(ColorScheme::Dark).background,
            "{preset} should define a real dark palette"
        );
    }
}

#[test]
fn families_carry_their_own_geometry() {
    let violet = ThemePreset::Violet.theme().dimen();
    assert_eq!(violet.corner_radius, 5.0);
    assert_eq!(violet.shadow_offset, Vec2::new(4.0, 4.0));

    let blue = ThemePreset::Blue.theme().dimen();
    assert_eq!(blue.corner_radius, 0.0);
    assert_eq!(blue.shadow_offset, Vec2::new(4.0, -4.0));

    let maroon = ThemePreset::Maroon.theme().dimen();
    assert_eq!(maroon.corner_radius, 20.0);

    // Multi borrows the violet geometry for its cycling palette.
    assert_eq!(ThemePreset::Multi.theme().dimen(), violet);
}

#[test]
fn shared_strokes_across_the_catalog() {
    for preset in ThemePreset::all() {
        let dimen = preset.theme().dimen();
        assert_eq!(dimen.border_width, 2.0);
        assert_eq!(dimen.padding_small, 8.0);
        assert_eq!(dimen.padding_medium, 16.0);
        assert_eq!(dimen.padding_large, 32.0);
    }
}

#[test]
fn multi_preset_cycles_hues_by_level() {
    let env = ThemeEnv::new(ThemePreset::Multi.theme());
    let tier0 = env.context().color.background;
    let tier1 = env.leveled(1).context().color.background;
    let tier2 = env.leveled(2).context().color.background;
    assert_ne!(tier0, tier1);
    assert_ne!(tier1, tier2);
    assert_ne!(tier0, tier2);

    assert_eq!(
        tier1,
        ThemePreset::Violet.theme().color(ColorScheme::Light).background
    );
    assert_eq!(
        tier2,
        ThemePreset::Blue.theme().color(ColorScheme::Light).background
    );
}
