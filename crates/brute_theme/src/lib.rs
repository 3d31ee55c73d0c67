//! Brute Theme System
//!
//! A leveled theming engine for neo-brutalist interfaces: bold borders,
//! offset shadows, and style tokens that automatically vary with nesting
//! depth and color scheme.
//!
//! # Overview
//!
//! A [`Theme`] carries three independent sequences of token sets (colors,
//! dimensions, and fonts) indexed by a nesting *level*. Containers derive a
//! child scope one level deeper, so nested content picks up progressively
//! distinct styling without re-specifying palettes. Levels past the end of a
//! sequence clamp to its last entry, so themes may define fewer tiers than
//! the deepest nesting actually reached.
//!
//! # Quick Start
//!
//! ```rust
//! use brute_theme::{ThemeEnv, ThemePreset};
//!
//! // Root scope: violet theme, level 0, light scheme.
//! let env = ThemeEnv::new(ThemePreset::Violet.theme());
//!
//! // A card hands its children a scope one level deeper.
//! let nested = env.leveled(1);
//!
//! // Leaf components resolve a flattened snapshot and render with it.
//! let ctx = nested.context();
//! let _bg = ctx.color.background;
//! let _radius = ctx.dimen.corner_radius;
//! ```
//!
//! # Resolution
//!
//! [`ThemeEnv::context`] resolves each axis independently:
//!
//! - an explicit override on a scope wins for that axis only
//! - otherwise the theme's token set for the current level, with the color
//!   axis additionally selected by the active [`ColorScheme`] (falling back
//!   to light when a scheme has no entry)
//!
//! Resolution is a pure function of the scope; it is cheap enough to run on
//! every render pass and allocates nothing.
//!
//! # Failure model
//!
//! The only failures are construction-time assertions: a [`Theme`] with an
//! empty token sequence, or a [`ColorSchemeSet`] without a light entry. Every
//! call-time path is total: lookups clamp to the last tier, scheme
//! resolution falls back to light, and leveling saturates at zero.

pub mod context;
pub mod env;
pub mod presets;
pub mod scheme;
pub mod theme;
pub mod tokens;

pub use context::BruteContext;
pub use env::ThemeEnv;
pub use presets::ThemePreset;
pub use scheme::ColorScheme;
pub use theme::Theme;
pub use tokens::*;
