//! Text field style.

use crate::chrome;
use brute_core::{DisplayList, DrawOp, Rect, Vec2};
use brute_theme::ThemeEnv;

#[derive(Clone, Debug)]
pub struct TextFieldConfig<'a> {
    /// Current contents, or the placeholder when empty.
    pub text: &'a str,
    pub placeholder: &'a str,
    pub rect: Rect,
    pub focused: bool,
}

impl<'a> TextFieldConfig<'a> {
    pub fn new(text: &'a str, placeholder: &'a str, rect: Rect) -> Self {
        Self {
            text,
            placeholder,
            rect,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Strategy for drawing a text field.
pub trait TextFieldStyle {
    fn render(&self, config: &TextFieldConfig<'_>, env: &ThemeEnv) -> DisplayList;
}

/// Neutral background with brute chrome. The shadow slab stays hidden under
/// the body until the field gains focus, then slides out.
#[derive(Clone, Copy, Debug, Default)]
pub struct BruteTextFieldStyle;

impl TextFieldStyle for BruteTextFieldStyle {
    fn render(&self, config: &TextFieldConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let slab = if config.focused {
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
        chrome::filled(&mut list, config.rect, ctx.color.neutral_background, &ctx);

        let empty = config.text.is_empty();
        let content = if empty { config.placeholder } else { config.text };
        let color = if empty {
            ctx.color.neutral_foreground.with_alpha(0.5)
        } else {
            ctx.color.neutral_foreground
        };
        list.push(DrawOp::Text {
            content: content.to_owned(),
            origin: Vec2::new(
                config.rect.min_x() + ctx.dimen.padding_medium,
                config.rect.min_y() + ctx.dimen.padding_medium,
            ),
            font: ctx.font.body,
            color,
        });
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brute_theme::ThemePreset;

    fn env() -> ThemeEnv {
        ThemeEnv::new(ThemePreset::Violet.theme())
    }

    fn slab(list: &DisplayList) -> Rect {
        match &list.ops()[0] {
            DrawOp::FillRect { rect, .. } => *rect,
            other => panic!("expected slab, got {other:?}"),
        }
    }

    #[test]
    fn focus_slides_the_shadow_out() {
        let env = env();
        let ctx = env.context();
        let rect = Rect::new(0.0, 0.0, 200.0, 44.0);

        let blurred = BruteTextFieldStyle.render(&TextFieldConfig::new("", "Email", rect), &env);
        assert_eq!(slab(&blurred), rect);

        let focused = BruteTextFieldStyle
            .render(&TextFieldConfig::new("", "Email", rect).focused(true), &env);
        assert_eq!(slab(&focused), rect.offset(ctx.dimen.shadow_offset));
    }

    #[test]
    fn empty_field_shows_a_faded_placeholder() {
        let env = env();
        let ctx = env.context();
        let rect = Rect::new(0.0, 0.0, 200.0, 44.0);

        let list = BruteTextFieldStyle.render(&TextFieldConfig::new("", "Email", rect), &env);
        match list.ops().last() {
            Some(DrawOp::Text { content, color, .. }) => {
                assert_eq!(content, "Email");
                assert_eq!(color.a, 0.5);
            }
            other => panic!("expected text, got {other:?}"),
        }

        let typed = BruteTextFieldStyle
            .render(&TextFieldConfig::new("me@example.com", "Email", rect), &env);
        match typed.ops().last() {
            Some(DrawOp::Text { content, color, .. }) => {
                assert_eq!(content, "me@example.com");
                assert_eq!(*color, ctx.color.neutral_foreground);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
