//! Font descriptors
//!
//! A [`FontStyle`] names a family design, a weight, and a point size. It is a
//! descriptor only; glyph resolution and shaping belong to whatever renderer
//! consumes the draw ops.

/// System font family designs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Default,
    Rounded,
    Monospaced,
}

/// Font weights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Bold,
}

/// A complete font descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontStyle {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f32,
}

impl FontStyle {
    pub const fn new(family: FontFamily, weight: FontWeight, size: f32) -> Self {
        Self {
            family,
            weight,
            size,
        }
    }
}
