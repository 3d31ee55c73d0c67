//! Disclosure container: an accent header row with a chevron that expands
//! into a divider and a leveled content body. Collapsed, only the header
//! carries the brutalized chrome.

use crate::chrome;
use brute_core::{DisplayList, DrawOp, Rect, Vec2};
use brute_theme::ThemeEnv;

#[derive(Clone, Debug)]
pub struct BruteDisclosure<'a> {
    pub title: &'a str,
    pub rect: Rect,
    pub expanded: bool,
}

impl<'a> BruteDisclosure<'a> {
    pub fn new(title: &'a str, rect: Rect, expanded: bool) -> Self {
        Self {
            title,
            rect,
            expanded,
        }
    }

    fn header_height(&self, env: &ThemeEnv) -> f32 {
        let ctx = env.context();
        ctx.font.header.size + ctx.dimen.padding_medium * 2.0
    }

    /// The header row, which is the whole footprint while collapsed.
    pub fn header_rect(&self, env: &ThemeEnv) -> Rect {
        Rect::new(
            self.rect.min_x(),
            self.rect.min_y(),
            self.rect.size.width,
            self.header_height(env),
        )
    }

    /// The body area beneath the header and divider when expanded.
    pub fn content_rect(&self, env: &ThemeEnv) -> Rect {
        let ctx = env.context();
        let top = self.header_height(env) + ctx.dimen.border_width;
        Rect::new(
            self.rect.min_x() + ctx.dimen.padding_medium,
            self.rect.min_y() + top + ctx.dimen.padding_medium,
            (self.rect.size.width - ctx.dimen.padding_medium * 2.0).max(0.0),
            (self.rect.size.height - top - ctx.dimen.padding_medium * 2.0).max(0.0),
        )
    }

    pub fn render<F>(&self, env: &ThemeEnv, content: F) -> DisplayList
    where
        F: FnOnce(&ThemeEnv, Rect) -> DisplayList,
    {
        let ctx = env.context();
        let header = self.header_rect(env);
        // Collapsed, the chrome wraps only the header row.
        let frame = if self.expanded { self.rect } else { header };

        let mut list = DisplayList::new();
        list.push(chrome::shadow(frame, &ctx));

        if self.expanded {
            list.push(DrawOp::FillRect {
                rect: frame,
                radius: ctx.dimen.corner_radius,
                color: ctx.color.background,
            });
        }

        list.push(DrawOp::FillRect {
            rect: header,
            radius: ctx.dimen.corner_radius,
            color: ctx.color.accent_background,
        });
        list.push(DrawOp::Text {
            content: self.title.to_owned(),
            origin: Vec2::new(
                header.min_x() + ctx.dimen.padding_medium,
                header.min_y() + ctx.dimen.padding_medium,
            ),
            font: ctx.font.header,
            color: ctx.color.accent_foreground,
        });

        // Trailing chevron, pointing up while expanded and down otherwise.
        let half = ctx.font.header.size / 4.0;
        let tip = Vec2::new(
            header.max_x() - ctx.dimen.padding_medium - half,
            if self.expanded {
                header.min_y() + header.size.height / 2.0 - half / 2.0
            } else {
                header.min_y() + header.size.height / 2.0 + half / 2.0
            },
        );
        let base_y = if self.expanded {
            tip.y + half
        } else {
            tip.y - half
        };
        list.push(DrawOp::Line {
            from: Vec2::new(tip.x - half, base_y),
            to: tip,
            width: ctx.dimen.border_width,
            color: ctx.color.accent_foreground,
        });
        list.push(DrawOp::Line {
            from: tip,
            to: Vec2::new(tip.x + half, base_y),
            width: ctx.dimen.border_width,
            color: ctx.color.accent_foreground,
        });

        if self.expanded {
            list.push(DrawOp::FillRect {
                rect: Rect::new(
                    frame.min_x(),
                    header.max_y(),
                    frame.size.width,
                    ctx.dimen.border_width,
                ),
                radius: 0.0,
                color: ctx.color.border,
            });
        }

        list.push(chrome::stroke(frame, &ctx));

        if self.expanded {
            list.extend(content(&env.leveled(1), self.content_rect(env)));
        }
        list
    }
}
