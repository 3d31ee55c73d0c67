//! Toggle styles: switch and checkbox.

use brute_core::{DisplayList, DrawOp, Rect, Vec2};
use brute_theme::ThemeEnv;

/// Cap on the control's height; taller layout rects just get more label room.
const CONTROL_MAX_HEIGHT: f32 = 25.0;

/// Vertical inset of the switch knob inside its track.
const KNOB_VERTICAL_INSET: f32 = 4.0;

/// Horizontal inset of the switch knob inside its track.
const KNOB_HORIZONTAL_INSET: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct ToggleConfig<'a> {
    pub label: &'a str,
    pub rect: Rect,
    pub on: bool,
}

impl<'a> ToggleConfig<'a> {
    pub fn new(label: &'a str, rect: Rect, on: bool) -> Self {
        Self { label, rect, on }
    }
}

/// Strategy for drawing a toggle.
pub trait ToggleStyle {
    fn render(&self, config: &ToggleConfig<'_>, env: &ThemeEnv) -> DisplayList;
}

fn control_height(rect: Rect) -> f32 {
    rect.size.height.min(CONTROL_MAX_HEIGHT)
}

fn label_op(config: &ToggleConfig<'_>, control_width: f32, env: &ThemeEnv) -> DrawOp {
    let ctx = env.context();
    DrawOp::Text {
        content: config.label.to_owned(),
        origin: Vec2::new(
            config.rect.min_x() + control_width + ctx.dimen.padding_small,
            config.rect.min_y(),
        ),
        font: ctx.font.body,
        color: ctx.color.foreground,
    }
}

/// A capsule track with a knob that slides between the leading and trailing
/// edges. The track takes the accent color when on and the neutral color
/// when off.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteSwitchToggleStyle;

impl ToggleStyle for BruteSwitchToggleStyle {
    fn render(&self, config: &ToggleConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let height = control_height(config.rect);
        // 2:1 capsule track.
        let track = Rect::new(config.rect.min_x(), config.rect.min_y(), height * 2.0, height);

        let knob_side = height - KNOB_VERTICAL_INSET * 2.0;
        let knob_x = if config.on {
            track.max_x() - KNOB_HORIZONTAL_INSET - knob_side
        } else {
            track.min_x() + KNOB_HORIZONTAL_INSET
        };
        let knob = Rect::new(
            knob_x,
            track.min_y() + KNOB_VERTICAL_INSET,
            knob_side,
            knob_side,
        );

        let track_fill = if config.on {
            ctx.color.accent_background
        } else {
            ctx.color.neutral_background
        };

        let mut list = DisplayList::new();
        list.push(DrawOp::FillCapsule {
            rect: track,
            color: track_fill,
        });
        list.push(DrawOp::StrokeCapsule {
            rect: track,
            width: ctx.dimen.border_width,
            color: ctx.color.border,
        });
        list.push(DrawOp::FillCircle {
            rect: knob,
            color: ctx.color.neutral_foreground,
        });
        list.push(DrawOp::StrokeCircle {
            rect: knob,
            width: ctx.dimen.border_width,
            color: ctx.color.border,
        });
        list.push(label_op(config, track.size.width, env));
        list
    }
}

/// A square box that fills with the accent color and shows a checkmark
/// when on.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteCheckboxToggleStyle;

impl ToggleStyle for BruteCheckboxToggleStyle {
    fn render(&self, config: &ToggleConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let side = control_height(config.rect);
        let boxed = Rect::new(config.rect.min_x(), config.rect.min_y(), side, side);

        let fill = if config.on {
            ctx.color.accent_background
        } else {
            ctx.color.neutral_background
        };

        let mut list = DisplayList::new();
        list.push(DrawOp::FillRect {
            rect: boxed,
            radius: 0.0,
            color: fill,
        });
        list.push(DrawOp::StrokeRect {
            rect: boxed,
            radius: 0.0,
            width: ctx.dimen.border_width,
            color: ctx.color.border,
        });

        if config.on {
            // Two strokes of a checkmark inside the inset box.
            let inner = boxed.inset(side * 0.25);
            let dip = Vec2::new(
                inner.min_x() + inner.size.width * 0.35,
                inner.max_y(),
            );
            list.push(DrawOp::Line {
                from: Vec2::new(inner.min_x(), inner.min_y() + inner.size.height * 0.5),
                to: dip,
                width: ctx.dimen.border_width,
                color: ctx.color.accent_foreground,
            });
            list.push(DrawOp::Line {
                from: dip,
                to: Vec2::new(inner.max_x(), inner.min_y()),
                width: ctx.dimen.border_width,
                color: ctx.color.accent_foreground,
            });
        }

        list.push(label_op(config, side, env));
        list
    }
}
