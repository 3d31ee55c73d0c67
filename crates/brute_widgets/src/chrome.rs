//! The brutalized chrome treatment.
//!
//! Every prominent element in the system is drawn the same way: a shadow
//! slab in the border color, offset by the theme's `shadow_offset` and
//! painted first so it sits beneath the body, then the body fill, then a
//! bold stroke. The helpers here compose that treatment so widget styles
//! never hand-roll it.

use brute_core::{Color, DisplayList, DrawOp, Rect};
use brute_theme::BruteContext;

/// The offset shadow slab for an element at `rect`.
///
/// Callers push this before the body fill; draw order is back-to-front.
pub fn shadow(rect: Rect, ctx: &BruteContext) -> DrawOp {
    DrawOp::FillRect {
        rect: rect.offset(ctx.dimen.shadow_offset),
        radius: ctx.dimen.corner_radius,
        color: ctx.color.border,
    }
}

/// The bold border stroke for an element at `rect`.
pub fn stroke(rect: Rect, ctx: &BruteContext) -> DrawOp {
    DrawOp::StrokeRect {
        rect,
        radius: ctx.dimen.corner_radius,
        width: ctx.dimen.border_width,
        color: ctx.color.border,
    }
}

/// Fill + stroke without a shadow.
pub fn filled(list: &mut DisplayList, rect: Rect, fill: Color, ctx: &BruteContext) {
    list.push(DrawOp::FillRect {
        rect,
        radius: ctx.dimen.corner_radius,
        color: fill,
    });
    list.push(stroke(rect, ctx));
}

/// The full treatment: shadow beneath, then fill, then stroke.
pub fn brutalized(list: &mut DisplayList, rect: Rect, fill: Color, ctx: &BruteContext) {
    list.push(shadow(rect, ctx));
    filled(list, rect, fill, ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use brute_theme::{ThemeEnv, ThemePreset};

    #[test]
    fn shadow_sits_beneath_the_body() {
        let ctx = ThemeEnv::new(ThemePreset::Violet.theme()).context();
        let rect = Rect::new(10.0, 10.0, 100.0, 40.0);

        let mut list = DisplayList::new();
        brutalized(&mut list, rect, ctx.color.accent_background, &ctx);

        assert_eq!(list.len(), 3);
        match &list.ops()[0] {
            DrawOp::FillRect {
                rect: slab, color, ..
            } => {
                assert_eq!(*color, ctx.color.border);
                assert_eq!(slab.origin.x, rect.origin.x + ctx.dimen.shadow_offset.x);
                assert_eq!(slab.origin.y, rect.origin.y + ctx.dimen.shadow_offset.y);
            }
            other => panic!("expected shadow slab first, got {other:?}"),
        }
        assert!(matches!(list.ops()[2], DrawOp::StrokeRect { .. }));
    }

    #[test]
    fn upward_shadow_families_offset_negative() {
        let ctx = ThemeEnv::new(ThemePreset::Maroon.theme()).context();
        let rect = Rect::new(0.0, 50.0, 80.0, 30.0);
        match shadow(rect, &ctx) {
            DrawOp::FillRect { rect: slab, .. } => assert_eq!(slab.origin.y, 46.0),
            other => panic!("expected fill, got {other:?}"),
        }
    }
}
