//! Draw ops and display lists
//!
//! Widget styles do not paint; they emit a [`DisplayList`] of [`DrawOp`]s.
//! Ops are ordered back-to-front, so a shadow pushed before a fill renders
//! beneath it.

use crate::color::Color;
use crate::geometry::{Rect, Vec2};
use crate::text::FontStyle;
use smallvec::SmallVec;

/// A single primitive paint operation.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a rounded rectangle.
    FillRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    /// Stroke a rounded rectangle outline.
    StrokeRect {
        rect: Rect,
        radius: f32,
        width: f32,
        color: Color,
    },
    /// Fill a capsule (rounded rectangle with radius = half the short side).
    FillCapsule { rect: Rect, color: Color },
    /// Stroke a capsule outline.
    StrokeCapsule {
        rect: Rect,
        width: f32,
        color: Color,
    },
    /// Fill a circle inscribed in `rect`.
    FillCircle { rect: Rect, color: Color },
    /// Stroke a circle inscribed in `rect`.
    StrokeCircle {
        rect: Rect,
        width: f32,
        color: Color,
    },
    /// Stroke a straight line segment.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Lay out a text run starting at `origin`.
    Text {
        content: String,
        origin: Vec2,
        font: FontStyle,
        color: Color,
    },
}

/// An ordered list of draw ops produced by one style render pass.
///
/// Backed by a small vector; typical widget output (shadow + fill + stroke +
/// a text run or two) stays inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    ops: SmallVec<[DrawOp; 8]>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Append every op from another list, preserving order.
    pub fn extend(&mut self, other: DisplayList) {
        self.ops.extend(other.ops);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate the fill colors in op order. Handy in tests.
    pub fn fill_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { color, .. }
            | DrawOp::FillCapsule { color, .. }
            | DrawOp::FillCircle { color, .. } => Some(*color),
            _ => None,
        })
    }
}

impl IntoIterator for DisplayList {
    type Item = DrawOp;
    type IntoIter = smallvec::IntoIter<[DrawOp; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}
