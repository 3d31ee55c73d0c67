//! Badge label styles.
//!
//! Small stroked chips in the caption font, used for tags and statuses.
//! Comes in accent and neutral variants, each supporting icon-only,
//! title-only, and combined display modes.

use brute_core::{Color, DisplayList, DrawOp, Rect, Vec2};
use brute_theme::ThemeEnv;

/// Which parts of the label a badge shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeMode {
    #[default]
    TitleAndIcon,
    TitleOnly,
    IconOnly,
}

#[derive(Clone, Debug)]
pub struct BadgeConfig<'a> {
    pub title: &'a str,
    /// A single glyph rendered before the title.
    pub icon: Option<&'a str>,
    pub rect: Rect,
}

impl<'a> BadgeConfig<'a> {
    pub fn new(title: &'a str, rect: Rect) -> Self {
        Self {
            title,
            icon: None,
            rect,
        }
    }

    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Strategy for drawing a badge label.
pub trait BadgeLabelStyle {
    fn render(&self, config: &BadgeConfig<'_>, env: &ThemeEnv) -> DisplayList;
}

fn badge(
    config: &BadgeConfig<'_>,
    env: &ThemeEnv,
    mode: BadgeMode,
    background: Color,
    foreground: Color,
) -> DisplayList {
    let ctx = env.context();

    let mut list = DisplayList::new();
    list.push(DrawOp::FillRect {
        rect: config.rect,
        radius: ctx.dimen.corner_radius,
        color: background,
    });
    list.push(DrawOp::StrokeRect {
        rect: config.rect,
        radius: ctx.dimen.corner_radius,
        width: ctx.dimen.border_width,
        color: ctx.color.border,
    });

    let mut cursor = Vec2::new(
        config.rect.min_x() + ctx.dimen.padding_small,
        config.rect.min_y() + ctx.dimen.padding_small,
    );
    if mode != BadgeMode::TitleOnly {
        if let Some(icon) = config.icon {
            list.push(DrawOp::Text {
                content: icon.to_owned(),
                origin: cursor,
                font: ctx.font.caption,
                color: foreground,
            });
            cursor.x += ctx.font.caption.size + ctx.dimen.padding_small;
        }
    }
    if mode != BadgeMode::IconOnly {
        list.push(DrawOp::Text {
            content: config.title.to_owned(),
            origin: cursor,
            font: ctx.font.caption,
            color: foreground,
        });
    }
    list
}

/// The accent-colored badge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteBadgeLabelStyle {
    pub mode: BadgeMode,
}

impl BruteBadgeLabelStyle {
    pub fn new(mode: BadgeMode) -> Self {
        Self { mode }
    }
}

impl BadgeLabelStyle for BruteBadgeLabelStyle {
    fn render(&self, config: &BadgeConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();
        badge(
            config,
            env,
            self.mode,
            ctx.color.accent_background,
            ctx.color.accent_foreground,
        )
    }
}

/// The neutral-colored badge, for quieter tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteNeutralBadgeLabelStyle {
    pub mode: BadgeMode,
}

impl BruteNeutralBadgeLabelStyle {
    pub fn new(mode: BadgeMode) -> Self {
        Self { mode }
    }
}

impl BadgeLabelStyle for BruteNeutralBadgeLabelStyle {
    fn render(&self, config: &BadgeConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();
        badge(
            config,
            env,
            self.mode,
            ctx.color.neutral_background,
            ctx.color.neutral_foreground,
        )
    }
}
