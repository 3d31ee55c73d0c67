//! Section container: an accent header band over a leveled content body,
//! separated by a border-colored divider.

use crate::chrome;
use brute_core::{DisplayList, DrawOp, Rect, Vec2};
use brute_theme::ThemeEnv;

#[derive(Clone, Debug)]
pub struct BruteSection<'a> {
    pub title: &'a str,
    pub rect: Rect,
}

impl<'a> BruteSection<'a> {
    pub fn new(title: &'a str, rect: Rect) -> Self {
        Self { title, rect }
    }

    fn header_height(&self, env: &ThemeEnv) -> f32 {
        let ctx = env.context();
        ctx.font.header.size + ctx.dimen.padding_medium * 2.0
    }

    /// The body area beneath the header and divider.
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
        let header_height = self.header_height(env);

        let mut list = DisplayList::new();
        list.push(chrome::shadow(self.rect, &ctx));

        // Body background underneath everything inside the outline.
        list.push(DrawOp::FillRect {
            rect: self.rect,
            radius: ctx.dimen.corner_radius,
            color: ctx.color.background,
        });

        let header = Rect::new(
            self.rect.min_x(),
            self.rect.min_y(),
            self.rect.size.width,
            header_height,
        );
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

        // Divider between header and body.
        list.push(DrawOp::FillRect {
            rect: Rect::new(
                self.rect.min_x(),
                header.max_y(),
                self.rect.size.width,
                ctx.dimen.border_width,
            ),
            radius: 0.0,
            color: ctx.color.border,
        });

        list.push(chrome::stroke(self.rect, &ctx));
        list.extend(content(&env.leveled(1), self.content_rect(env)));
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brute_theme::{ColorScheme, ThemePreset};

    #[test]
    fn header_band_uses_accent_colors() {
        let env = ThemeEnv::new(ThemePreset::Blue.theme());
        let ctx = env.context();
        let section = BruteSection::new("Settings", Rect::new(0.0, 0.0, 300.0, 200.0));

        let list = section.render(&env, |_, _| DisplayList::new());
        let fills: Vec<_> = list.fill_colors().collect();
        // Shadow slab, body, header band, divider.
        assert_eq!(fills[2], ctx.color.accent_background);
        assert_eq!(fills[3], ctx.color.border);

        match &list.ops()[3] {
            DrawOp::Text { font, color, .. } => {
                assert_eq!(*font, ctx.font.header);
                assert_eq!(*color, ctx.color.accent_foreground);
            }
            other => panic!("expected title, got {other:?}"),
        }
    }

    #[test]
    fn body_content_is_leveled() {
        let env = ThemeEnv::new(ThemePreset::Blue.theme());
        let section = BruteSection::new("Settings", Rect::new(0.0, 0.0, 300.0, 200.0));

        let mut seen = None;
        section.render(&env, |child, _| {
            seen = Some(child.context().color.background);
            DisplayList::new()
        });
        assert_eq!(
            seen,
            Some(
                ThemePreset::Blue
                    .theme()
                    .color_at(1, ColorScheme::Light)
                    .background
            )
        );
    }

    #[test]
    fn divider_sits_below_the_header() {
        let env = ThemeEnv::new(ThemePreset::Blue.theme());
        let ctx = env.context();
        let section = BruteSection::new("Settings", Rect::new(0.0, 0.0, 300.0, 200.0));

        let list = section.render(&env, |_, _| DisplayList::new());
        let divider_y = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color, .. } if *color == ctx.color.border => {
                    Some(rect.min_y())
                }
                _ => None,
            })
            .nth(1)
            .unwrap();
        assert_eq!(divider_y, ctx.font.header.size + ctx.dimen.padding_medium * 2.0);
    }
}
