//! Token sets for theming
//!
//! Token sets are the atomic value bundles one theme tier is made of:
//! - Colors (per color scheme)
//! - Dimensions (radius, shadow offset, border width, padding scale)
//! - Fonts (semantic font descriptors)

mod color;
mod dimension;
mod font;

pub use color::*;
pub use dimension::*;
pub use font::*;
