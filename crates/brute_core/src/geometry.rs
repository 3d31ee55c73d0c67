//! Minimal geometry value types used by the widget styles

/// A 2D vector, also used for offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The shorter of width and height.
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(self) -> f32 {
        self.origin.x
    }

    pub fn min_y(self) -> f32 {
        self.origin.y
    }

    pub fn max_x(self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// The same rectangle translated by an offset.
    pub fn offset(self, by: Vec2) -> Self {
        Self {
            origin: Vec2::new(self.origin.x + by.x, self.origin.y + by.y),
            size: self.size,
        }
    }

    /// The rectangle shrunk by `amount` on every side. Clamps at zero size.
    pub fn inset(self, amount: f32) -> Self {
        let width = (self.size.width - amount * 2.0).max(0.0);
        let height = (self.size.height - amount * 2.0).max(0.0);
        Self {
            origin: Vec2::new(self.origin.x + amount, self.origin.y + amount),
            size: Size::new(width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.max_y(), 70.0);
        assert_eq!(r.mid_x(), 60.0);
    }

    #[test]
    fn inset_clamps_at_zero() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset(8.0);
        assert_eq!(r.size, Size::new(0.0, 0.0));
    }

    #[test]
    fn offset_moves_origin_only() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0).offset(Vec2::new(4.0, -4.0));
        assert_eq!(r.origin, Vec2::new(5.0, -2.0));
        assert_eq!(r.size, Size::new(3.0, 4.0));
    }
}
