//! The resolved theme snapshot

use crate::tokens::{ColorSet, DimensionSet, FontSet};

/// A flattened, immediately-usable theming snapshot.
///
/// This is the only thing a style consumer depends on. It is recomputed on
/// every resolution rather than stored; see [`crate::ThemeEnv::context`].
///
/// ```rust
/// use brute_theme::ThemeEnv;
///
/// let ctx = ThemeEnv::default().context();
/// let _text = ctx.color.foreground;
/// let _pad = ctx.dimen.padding_medium;
/// let _font = ctx.font.body;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BruteContext {
    /// The resolved color set for the current level and color scheme.
    pub color: ColorSet,
    /// The resolved dimension set for the current level.
    pub dimen: DimensionSet,
    /// The resolved font set for the current level.
    pub font: FontSet,
}
