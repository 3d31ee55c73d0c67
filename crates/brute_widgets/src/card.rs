//! Card container.
//!
//! A brutalized surface with medium padding whose content renders one theme
//! level deeper. Nesting cards is the canonical way to walk a theme's color
//! tiers.

use crate::chrome;
use brute_core::{DisplayList, Rect};
use brute_theme::ThemeEnv;

#[derive(Clone, Copy, Debug)]
pub struct BruteCard {
    pub rect: Rect,
}

impl BruteCard {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// The area handed to content, inset by the theme's medium padding.
    pub fn content_rect(&self, env: &ThemeEnv) -> Rect {
        self.rect.inset(env.context().dimen.padding_medium)
    }

    /// Render the card chrome, then the content in a scope one level deeper.
    pub fn render<F>(&self, env: &ThemeEnv, content: F) -> DisplayList
    where
        F: FnOnce(&ThemeEnv, Rect) -> DisplayList,
    {
        let ctx = env.context();

        let mut list = DisplayList::new();
        chrome::brutalized(&mut list, self.rect, ctx.color.background, &ctx);
        list.extend(content(&env.leveled(1), self.content_rect(env)));
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brute_core::DrawOp;
    use brute_theme::{ColorScheme, ThemePreset};

    #[test]
    fn content_renders_one_level_deeper() {
        let env = ThemeEnv::new(ThemePreset::Violet.theme());
        let card = BruteCard::new(Rect::new(0.0, 0.0, 300.0, 200.0));

        let list = card.render(&env, |child, rect| {
            let ctx = child.context();
            let mut inner = DisplayList::new();
            inner.push(DrawOp::FillRect {
                rect,
                radius: 0.0,
                color: ctx.color.background,
            });
            inner
        });

        let tier1 = ThemePreset::Violet
            .theme()
            .color_at(1, ColorScheme::Light)
            .background;
        assert_eq!(list.fill_colors().last(), Some(tier1));
    }

    #[test]
    fn content_rect_is_padded() {
        let env = ThemeEnv::new(ThemePreset::Violet.theme());
        let card = BruteCard::new(Rect::new(0.0, 0.0, 300.0, 200.0));
        let inner = card.content_rect(&env);
        assert_eq!(inner.min_x(), 16.0);
        assert_eq!(inner.size.width, 268.0);
    }

    #[test]
    fn nested_cards_climb_the_tiers() {
        let env = ThemeEnv::new(ThemePreset::Multi.theme());
        let outer = BruteCard::new(Rect::new(0.0, 0.0, 300.0, 200.0));

        let list = outer.render(&env, |child, rect| {
            BruteCard::new(rect).render(child, |_, _| DisplayList::new())
        });

        // Outer body fill is tier 0, inner body fill is tier 1.
        let fills: Vec<_> = list.fill_colors().collect();
        let tier0 = ThemePreset::Multi
            .theme()
            .color_at(0, ColorScheme::Light)
            .background;
        let tier1 = ThemePreset::Multi
            .theme()
            .color_at(1, ColorScheme::Light)
            .background;
        assert_eq!(fills[1], tier0);
        assert_eq!(fills[3], tier1);
    }
}
