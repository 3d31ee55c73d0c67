//! Ambient scope propagation
//!
//! SwiftUI-style environment inheritance reimplemented as an explicit context
//! value threaded down render calls: a parent builds a child [`ThemeEnv`]
//! with one of the scope transitions and passes it along. The transitions
//! (replacing the theme, shifting the level, setting an override slot) are
//! orthogonal and composable; everything a child does not set is inherited.

use crate::context::BruteContext;
use crate::presets::ThemePreset;
use crate::scheme::ColorScheme;
use crate::theme::Theme;
use crate::tokens::{ColorSet, DimensionSet, FontSet};

/// One scope in the ambient chain: the current theme, color scheme, and
/// per-axis override slots.
///
/// Cloning is cheap (the theme's tier sequences are `Arc`-shared), so every
/// scope transition returns a new value and leaves the parent scope intact;
/// siblings never observe each other's changes.
#[derive(Clone, Debug)]
pub struct ThemeEnv {
    theme: Theme,
    scheme: ColorScheme,
    color_override: Option<ColorSet>,
    dimen_override: Option<DimensionSet>,
    font_override: Option<FontSet>,
}

impl Default for ThemeEnv {
    /// The root scope available with no setup: the violet theme at level 0,
    /// the default (light) scheme, no overrides.
    fn default() -> Self {
        Self::new(ThemePreset::Violet.theme())
    }
}

impl ThemeEnv {
    /// A root scope for an explicit theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            scheme: ColorScheme::default(),
            color_override: None,
            dimen_override: None,
            font_override: None,
        }
    }

    /// The active color scheme.
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// A child scope with the theme replaced wholesale.
    ///
    /// Resolution below this point restarts at the new theme's own level;
    /// the scheme and any inherited overrides are kept.
    pub fn with_theme(&self, theme: Theme) -> Self {
        tracing::debug!(level = theme.level(), "replacing ambient theme");
        Self {
            theme,
            ..self.clone()
        }
    }

    /// A child scope one or more levels away from this one.
    ///
    /// Containers call `leveled(1)` before rendering children, which is how
    /// nested content picks up progressively distinct styling.
    pub fn leveled(&self, amount: i32) -> Self {
        Self {
            theme: self.theme.leveled(amount),
            ..self.clone()
        }
    }

    /// A child scope under a different color scheme.
    pub fn with_scheme(&self, scheme: ColorScheme) -> Self {
        if scheme != self.scheme {
            tracing::debug!(?scheme, "switching ambient color scheme");
        }
        Self {
            scheme,
            ..self.clone()
        }
    }

    /// A child scope with the scheme flipped between light and dark.
    pub fn toggle_scheme(&self) -> Self {
        self.with_scheme(self.scheme.toggle())
    }

    /// A child scope with the color axis overridden (or cleared with `None`).
    /// Dimension and font resolution are unaffected.
    pub fn with_color_override(&self, set: Option<ColorSet>) -> Self {
        Self {
            color_override: set,
            ..self.clone()
        }
    }

    /// A child scope with the dimension axis overridden (or cleared).
    pub fn with_dimen_override(&self, set: Option<DimensionSet>) -> Self {
        Self {
            dimen_override: set,
            ..self.clone()
        }
    }

    /// A child scope with the font axis overridden (or cleared).
    pub fn with_font_override(&self, set: Option<FontSet>) -> Self {
        Self {
            font_override: set,
            ..self.clone()
        }
    }

    /// Resolve the flattened snapshot for this scope.
    ///
    /// Each axis resolves independently: the scope's override if present,
    /// else the theme's token set at the theme's current level (colors
    /// additionally selected by the active scheme). Pure and allocation-free;
    /// safe to call on every render pass.
    pub fn context(&self) -> BruteContext {
        BruteContext {
            color: self
                .color_override
                .unwrap_or_else(|| self.theme.color(self.scheme)),
            dimen: self.dimen_override.unwrap_or_else(|| self.theme.dimen()),
            font: self.font_override.unwrap_or_else(|| self.theme.font()),
        }
    }
}
