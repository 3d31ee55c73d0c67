//! Notice container: a prominent brutalized banner with a title and body
//! text, filled with the accent color or a caller-chosen one.

use crate::chrome;
use brute_core::{Color, DisplayList, DrawOp, Rect, Vec2};
use brute_theme::ThemeEnv;

#[derive(Clone, Debug)]
pub struct NoticeConfig<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub rect: Rect,
    /// Custom background; defaults to the theme's accent background.
    pub fill: Option<Color>,
}

impl<'a> NoticeConfig<'a> {
    pub fn new(title: &'a str, content: &'a str, rect: Rect) -> Self {
        Self {
            title,
            content,
            rect,
            fill: None,
        }
    }

    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteNotice;

impl BruteNotice {
    pub fn render(&self, config: &NoticeConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let mut list = DisplayList::new();
        chrome::brutalized(
            &mut list,
            config.rect,
            config.fill.unwrap_or(ctx.color.accent_background),
            &ctx,
        );

        let origin = Vec2::new(
            config.rect.min_x() + ctx.dimen.padding_medium,
            config.rect.min_y() + ctx.dimen.padding_medium,
        );
        list.push(DrawOp::Text {
            content: config.title.to_owned(),
            origin,
            font: ctx.font.header,
            color: ctx.color.accent_foreground,
        });
        list.push(DrawOp::Text {
            content: config.content.to_owned(),
            origin: Vec2::new(
                origin.x,
                origin.y + ctx.font.header.size + ctx.dimen.padding_small,
            ),
            font: ctx.font.body,
            color: ctx.color.accent_foreground,
        });
        list
    }
}
