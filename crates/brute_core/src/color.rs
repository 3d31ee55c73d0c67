//! Normalized RGBA color values

/// An RGBA color with channels normalized to `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create an opaque color from normalized channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from normalized channels including alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channel values.
    ///
    /// Channels are asserted to be within `0..=255`; passing anything else
    /// is a programming error in theme authoring and fails fast.
    pub fn rgb8(r: i32, g: i32, b: i32) -> Self {
        assert!(
            [r, g, b].iter().all(|c| (0..=255).contains(c)),
            "color channels must range between 0 and 255, got ({r}, {g}, {b})"
        );
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    ///
    /// This is the constructor palette data is written with.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
        )
    }

    /// Return the same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Reduce saturation toward grayscale. `amount` of 1.0 keeps the color,
    /// 0.0 collapses it to its luminance. Used for disabled control states.
    pub fn saturated(self, amount: f32) -> Self {
        let luma = 0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b;
        Self {
            r: luma + (self.r - luma) * amount,
            g: luma + (self.g - luma) * amount,
            b: luma + (self.b - luma) * amount,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_normalizes_channels() {
        let c = Color::from_hex(0xFF0033);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn from_hex_matches_rgb8() {
        assert_eq!(Color::from_hex(0xEEE6FE), Color::rgb8(238, 230, 254));
    }

    #[test]
    #[should_panic(expected = "range between 0 and 255")]
    fn rgb8_rejects_out_of_range_channel() {
        let _ = Color::rgb8(256, 0, 0);
    }

    #[test]
    #[should_panic(expected = "range between 0 and 255")]
    fn rgb8_rejects_negative_channel() {
        let _ = Color::rgb8(0, -1, 0);
    }

    #[test]
    fn from_hex_covers_the_named_constants() {
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
        assert_eq!(Color::from_hex(0x000000), Color::BLACK);
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::from_hex(0xAA85FF).with_alpha(0.5);
        assert_eq!(c.a, 0.5);
        assert_eq!(c.with_alpha(1.0), Color::from_hex(0xAA85FF));
    }

    #[test]
    fn saturated_zero_is_gray() {
        let c = Color::from_hex(0xAA85FF).saturated(0.0);
        assert!((c.r - c.g).abs() < 1e-6);
        assert!((c.g - c.b).abs() < 1e-6);
    }
}
