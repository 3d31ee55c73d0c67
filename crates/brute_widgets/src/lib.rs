//! Brute Widget Styles
//!
//! Style consumers for the Brute design system. Every style here reads the
//! resolved [`BruteContext`](brute_theme::BruteContext) for its scope plus its
//! own configuration, and emits a [`DisplayList`](brute_core::DisplayList) of
//! draw ops. Nothing in this crate reaches into theme internals or holds
//! mutable state; a render pass is a pure function of config and scope.
//!
//! The shared visual language lives in [`chrome`]: a brutalized element is a
//! border-colored shadow slab, a fill, and a bold stroke, with the shadow
//! offset by the theme's `shadow_offset`. Containers hand their children a
//! scope one level deeper, so nesting inside a [`card`] or [`section`] walks
//! the theme's tiers automatically.
//!
//! # Quick Start
//!
//! ```rust
//! use brute_core::Rect;
//! use brute_theme::{ThemeEnv, ThemePreset};
//! use brute_widgets::button::{ButtonConfig, ButtonStyle, BruteButtonStyle};
//!
//! let env = ThemeEnv::new(ThemePreset::Orange.theme());
//! let config = ButtonConfig::new("Get Started", Rect::new(0.0, 0.0, 160.0, 48.0));
//! let ops = BruteButtonStyle.render(&config, &env);
//! assert!(!ops.is_empty());
//! ```

pub mod button;
pub mod card;
pub mod chrome;
pub mod disclosure;
pub mod gauge;
pub mod label;
pub mod notice;
pub mod picker;
pub mod progress;
pub mod section;
pub mod shape;
pub mod style;
pub mod text_field;
pub mod toggle;

pub use style::StyleSheet;
