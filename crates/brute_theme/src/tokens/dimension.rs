//! Dimension token sets

use brute_core::Vec2;

/// The geometry tokens for one theme tier.
///
/// The shadow offset is what gives each theme family its signature: the
/// offset shadow is a border-colored slab drawn beneath every brutalized
/// element, and pressing a control moves the body onto it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionSet {
    /// Corner radius for rounded elements.
    pub corner_radius: f32,
    /// Offset of the drop-shadow slab.
    pub shadow_offset: Vec2,
    /// Width of borders and strokes.
    pub border_width: f32,
    /// Tight spacing.
    pub padding_small: f32,
    /// Standard spacing.
    pub padding_medium: f32,
    /// Generous spacing.
    pub padding_large: f32,
}

impl DimensionSet {
    /// Soft rounded corners, down-right shadow.
    pub const fn violet() -> Self {
        Self {
            corner_radius: 5.0,
            shadow_offset: Vec2::new(4.0, 4.0),
            border_width: 2.0,
            padding_small: 8.0,
            padding_medium: 16.0,
            padding_large: 32.0,
        }
    }

    /// Sharp rectangles, up-right shadow.
    pub const fn blue() -> Self {
        Self {
            corner_radius: 0.0,
            shadow_offset: Vec2::new(4.0, -4.0),
            ..Self::violet()
        }
    }

    /// Rounded corners, up-left shadow.
    pub const fn orange() -> Self {
        Self {
            corner_radius: 10.0,
            shadow_offset: Vec2::new(-4.0, -4.0),
            ..Self::violet()
        }
    }

    /// Rounded corners, heavy down-right shadow.
    pub const fn magenta() -> Self {
        Self {
            corner_radius: 10.0,
            shadow_offset: Vec2::new(5.0, 5.0),
            ..Self::violet()
        }
    }

    /// Highly rounded corners, straight-up shadow.
    pub const fn maroon() -> Self {
        Self {
            corner_radius: 20.0,
            shadow_offset: Vec2::new(0.0, -4.0),
            ..Self::violet()
        }
    }

    /// Medium rounded corners, straight-down shadow.
    pub const fn green() -> Self {
        Self {
            corner_radius: 15.0,
            shadow_offset: Vec2::new(0.0, 4.0),
            ..Self::violet()
        }
    }
}
