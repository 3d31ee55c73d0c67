//! Button styles.
//!
//! Four takes on the same chassis: a padded label over a brutalized body.
//! The default style presses the body down onto its shadow; the reverse
//! style keeps the body still and slides the shadow out instead; the
//! neutral style swaps in the neutral palette for secondary actions; the
//! basic style drops the shadow entirely and dims while pressed.

use crate::chrome;
use brute_core::{Color, DisplayList, DrawOp, Rect, Vec2};
use brute_theme::{BruteContext, ThemeEnv};

/// Saturation applied to a disabled button's colors.
const DISABLED_SATURATION: f32 = 0.25;

fn dim(color: Color, enabled: bool) -> Color {
    if enabled {
        color
    } else {
        color.saturated(DISABLED_SATURATION)
    }
}

/// Everything a button style needs to know about one button.
#[derive(Clone, Debug)]
pub struct ButtonConfig<'a> {
    pub label: &'a str,
    pub rect: Rect,
    pub pressed: bool,
    pub enabled: bool,
}

impl<'a> ButtonConfig<'a> {
    pub fn new(label: &'a str, rect: Rect) -> Self {
        Self {
            label,
            rect,
            pressed: false,
            enabled: true,
        }
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Strategy for drawing a button.
pub trait ButtonStyle {
    fn render(&self, config: &ButtonConfig<'_>, env: &ThemeEnv) -> DisplayList;
}

fn label_op(config: &ButtonConfig<'_>, body: Rect, ctx: &BruteContext, color: Color) -> DrawOp {
    DrawOp::Text {
        content: config.label.to_owned(),
        origin: Vec2::new(
            body.min_x() + ctx.dimen.padding_medium,
            body.min_y() + ctx.dimen.padding_medium,
        ),
        font: ctx.font.body,
        color,
    }
}

/// The default style: accent colors, press moves the body onto its shadow.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteButtonStyle;

impl ButtonStyle for BruteButtonStyle {
    fn render(&self, config: &ButtonConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let body = if config.pressed {
            config.rect.offset(ctx.dimen.shadow_offset)
        } else {
            config.rect
        };

        let mut list = DisplayList::new();
        list.push(DrawOp::FillRect {
            rect: config.rect.offset(ctx.dimen.shadow_offset),
            radius: ctx.dimen.corner_radius,
            color: dim(ctx.color.border, config.enabled),
        });
        list.push(DrawOp::FillRect {
            rect: body,
            radius: ctx.dimen.corner_radius,
            color: dim(ctx.color.accent_background, config.enabled),
        });
        list.push(DrawOp::StrokeRect {
            rect: body,
            radius: ctx.dimen.corner_radius,
            width: ctx.dimen.border_width,
            color: dim(ctx.color.border, config.enabled),
        });
        list.push(label_op(
            config,
            body,
            &ctx,
            dim(ctx.color.accent_foreground, config.enabled),
        ));
        list
    }
}

/// Accent colors with the inverse press effect: the body stays put and the
/// shadow slides out from underneath it.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteReverseButtonStyle;

impl ButtonStyle for BruteReverseButtonStyle {
    fn render(&self, config: &ButtonConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        // Unpressed, the slab hides exactly beneath the body.
        let slab = if config.pressed {
            config.rect.offset(ctx.dimen.shadow_offset)
        } else {
            config.rect
        };

        let mut list = DisplayList::new();
        list.push(DrawOp::FillRect {
            rect: slab,
            radius: ctx.dimen.corner_radius,
            color: ctx.color.border,
        });
        chrome::filled(&mut list, config.rect, ctx.color.accent_background, &ctx);
        list.push(label_op(config, config.rect, &ctx, ctx.color.accent_foreground));
        list
    }
}

/// Neutral colors for secondary actions; same press effect as the default.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteNeutralButtonStyle;

impl ButtonStyle for BruteNeutralButtonStyle {
    fn render(&self, config: &ButtonConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let body = if config.pressed {
            config.rect.offset(ctx.dimen.shadow_offset)
        } else {
            config.rect
        };

        let mut list = DisplayList::new();
        list.push(chrome::shadow(config.rect, &ctx));
        chrome::filled(&mut list, body, ctx.color.neutral_background, &ctx);
        list.push(label_op(config, body, &ctx, ctx.color.neutral_foreground));
        list
    }
}

/// No shadow at all; pressing dims the background to 75% opacity.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteBasicButtonStyle;

impl ButtonStyle for BruteBasicButtonStyle {
    fn render(&self, config: &ButtonConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let fill = dim(ctx.color.accent_background, config.enabled);
        let fill = if config.pressed { fill.with_alpha(0.75) } else { fill };

        let mut list = DisplayList::new();
        list.push(DrawOp::FillRect {
            rect: config.rect,
            radius: ctx.dimen.corner_radius,
            color: fill,
        });
        list.push(DrawOp::StrokeRect {
            rect: config.rect,
            radius: ctx.dimen.corner_radius,
            width: ctx.dimen.border_width,
            color: dim(ctx.color.border, config.enabled),
        });
        list.push(label_op(
            config,
            config.rect,
            &ctx,
            dim(ctx.color.accent_foreground, config.enabled),
        ));
        list
    }
}
