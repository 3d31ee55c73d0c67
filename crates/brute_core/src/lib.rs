//! Brute Core
//!
//! Foundational primitives shared by the Brute design system crates:
//!
//! - [`Color`]: normalized RGBA color values with 8-bit and packed-hex
//!   constructors
//! - Geometry: [`Vec2`], [`Size`], [`Rect`]
//! - Font descriptors: [`FontFamily`], [`FontWeight`], [`FontStyle`]
//! - Draw ops: [`DrawOp`] and [`DisplayList`], the output contract style
//!   consumers render into
//!
//! Everything here is an immutable value type. Nothing allocates on the hot
//! path except [`DisplayList`], which is backed by a small-vector so typical
//! widget output stays inline.

pub mod color;
pub mod draw;
pub mod geometry;
pub mod text;

pub use color::Color;
pub use draw::{DisplayList, DrawOp};
pub use geometry::{Rect, Size, Vec2};
pub use text::{FontFamily, FontStyle, FontWeight};
