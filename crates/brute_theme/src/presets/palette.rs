//! Palette data for the built-in presets.
//!
//! Every family follows the same three-tier rhythm: a saturated base tier,
//! a white (or near-black) resting tier, and a pale third tier, so nested
//! surfaces alternate visibly as the level climbs. Only the background and
//! accent colors vary per tier; text, neutral, and border colors are shared
//! across the catalog.

use crate::scheme::ColorScheme;
use crate::tokens::{ColorSchemeSet, ColorSet};
use brute_core::Color;

const DARK_FOREGROUND: Color = Color::from_hex(0xE5E5E5);
const DARK_NEUTRAL_BG: Color = Color::from_hex(0x1F1F1F);

fn light(background: Color, accent_foreground: Color, accent_background: Color) -> ColorSet {
    ColorSet {
        foreground: Color::BLACK,
        background,
        accent_foreground,
        accent_background,
        neutral_foreground: Color::BLACK,
        neutral_background: Color::WHITE,
        border: Color::BLACK,
    }
}

fn dark(background: Color, accent_foreground: Color, accent_background: Color) -> ColorSet {
    ColorSet {
        foreground: DARK_FOREGROUND,
        background,
        accent_foreground,
        accent_background,
        neutral_foreground: Color::WHITE,
        neutral_background: DARK_NEUTRAL_BG,
        border: Color::BLACK,
    }
}

fn violet_base() -> ColorSchemeSet {
    ColorSchemeSet::light_dark(
        light(Color::from_hex(0xEEE6FE), Color::BLACK, Color::from_hex(0xAA85FF)),
        dark(Color::from_hex(0x332352), Color::BLACK, Color::from_hex(0xA985FF)),
    )
}

pub(crate) fn violet() -> Vec<ColorSchemeSet> {
    vec![
        violet_base(),
        ColorSchemeSet::light_dark(
            light(Color::WHITE, Color::BLACK, Color::from_hex(0xCEB7FF)),
            dark(DARK_NEUTRAL_BG, Color::BLACK, Color::from_hex(0xCEB7FF)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xF8F5FF), Color::BLACK, Color::from_hex(0xBC9EFF)),
            dark(Color::from_hex(0x291C42), Color::BLACK, Color::from_hex(0xBC9EFF)),
        ),
    ]
}

fn blue_base() -> ColorSchemeSet {
    ColorSchemeSet::light_dark(
        light(Color::from_hex(0xE0F2FE), Color::BLACK, Color::from_hex(0x7DD3FC)),
        dark(Color::from_hex(0x1E3A52), DARK_FOREGROUND, Color::from_hex(0x7DD3FC)),
    )
}

pub(crate) fn blue() -> Vec<ColorSchemeSet> {
    vec![
        blue_base(),
        ColorSchemeSet::light_dark(
            light(Color::WHITE, Color::BLACK, Color::from_hex(0xBAE6FD)),
            dark(DARK_NEUTRAL_BG, Color::BLACK, Color::from_hex(0xBAE6FD)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xF0F9FF), Color::BLACK, Color::from_hex(0x93C5FD)),
            dark(Color::from_hex(0x172554), Color::BLACK, Color::from_hex(0x93C5FD)),
        ),
    ]
}

fn orange_base() -> ColorSchemeSet {
    ColorSchemeSet::light_dark(
        light(Color::from_hex(0xFEEBDC), Color::BLACK, Color::from_hex(0xFBB03B)),
        dark(Color::from_hex(0x52341C), Color::BLACK, Color::from_hex(0xFBB03B)),
    )
}

pub(crate) fn orange() -> Vec<ColorSchemeSet> {
    vec![
        orange_base(),
        ColorSchemeSet::light_dark(
            light(Color::WHITE, Color::BLACK, Color::from_hex(0xFDCB6E)),
            dark(DARK_NEUTRAL_BG, Color::BLACK, Color::from_hex(0xFDCB6E)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xFFF7ED), Color::BLACK, Color::from_hex(0xFCBA03)),
            dark(Color::from_hex(0x432A16), Color::BLACK, Color::from_hex(0xFCBA03)),
        ),
    ]
}

pub(crate) fn green() -> Vec<ColorSchemeSet> {
    vec![
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xDCFCE7), Color::BLACK, Color::from_hex(0x4ADE80)),
            dark(Color::from_hex(0x1C522E), Color::BLACK, Color::from_hex(0x4ADE80)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::WHITE, Color::BLACK, Color::from_hex(0x86EFAC)),
            dark(DARK_NEUTRAL_BG, Color::BLACK, Color::from_hex(0x86EFAC)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xF0FDF4), Color::BLACK, Color::from_hex(0x4ADE80)),
            dark(Color::from_hex(0x14532D), Color::BLACK, Color::from_hex(0x4ADE80)),
        ),
    ]
}

pub(crate) fn magenta() -> Vec<ColorSchemeSet> {
    vec![
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xFAE8FF), Color::BLACK, Color::from_hex(0xE879F9)),
            dark(Color::from_hex(0x491D52), Color::BLACK, Color::from_hex(0xE879F9)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::WHITE, Color::BLACK, Color::from_hex(0xF0ABFC)),
            dark(DARK_NEUTRAL_BG, Color::BLACK, Color::from_hex(0xF0ABFC)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xFDF4FF), Color::BLACK, Color::from_hex(0xD946EF)),
            dark(Color::from_hex(0x3B1754), Color::BLACK, Color::from_hex(0xD946EF)),
        ),
    ]
}

// Maroon accents are dark enough that both schemes put white text on them.
pub(crate) fn maroon() -> Vec<ColorSchemeSet> {
    vec![
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xFEE2E2), Color::WHITE, Color::from_hex(0x9F1239)),
            dark(Color::from_hex(0x4C1D2A), Color::WHITE, Color::from_hex(0x9F1239)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::WHITE, Color::WHITE, Color::from_hex(0xBE123C)),
            dark(DARK_NEUTRAL_BG, Color::WHITE, Color::from_hex(0xBE123C)),
        ),
        ColorSchemeSet::light_dark(
            light(Color::from_hex(0xFFF1F2), Color::WHITE, Color::from_hex(0x881337)),
            dark(Color::from_hex(0x451A26), Color::WHITE, Color::from_hex(0x881337)),
        ),
    ]
}

/// Hue-cycling palette: orange, then violet, then blue base tiers.
pub(crate) fn multi() -> Vec<ColorSchemeSet> {
    vec![orange_base(), violet_base(), blue_base()]
}
