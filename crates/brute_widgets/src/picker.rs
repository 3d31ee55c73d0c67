//! Segmented picker style.

use crate::chrome;
use brute_core::{DisplayList, DrawOp, Rect, Vec2};
use brute_theme::ThemeEnv;

#[derive(Clone, Debug)]
pub struct PickerConfig<'a> {
    pub segments: &'a [&'a str],
    pub selected: usize,
    pub rect: Rect,
}

impl<'a> PickerConfig<'a> {
    pub fn new(segments: &'a [&'a str], selected: usize, rect: Rect) -> Self {
        Self {
            segments,
            selected,
            rect,
        }
    }
}

/// Strategy for drawing a picker.
pub trait PickerStyle {
    fn render(&self, config: &PickerConfig<'_>, env: &ThemeEnv) -> DisplayList;
}

/// A padded row of equal-width segments inside a stroked container. The
/// selected segment gets the accent background and its own border.
#[derive(Clone, Copy, Debug, Default)]
pub struct SegmentedPickerStyle;

impl PickerStyle for SegmentedPickerStyle {
    fn render(&self, config: &PickerConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let mut list = DisplayList::new();
        chrome::filled(&mut list, config.rect, ctx.color.background, &ctx);

        if config.segments.is_empty() {
            return list;
        }

        let gap = ctx.dimen.padding_small;
        let inner = config.rect.inset(gap);
        let count = config.segments.len() as f32;
        let segment_width = (inner.size.width - gap * (count - 1.0)) / count;

        for (index, title) in config.segments.iter().enumerate() {
            let segment = Rect::new(
                inner.min_x() + index as f32 * (segment_width + gap),
                inner.min_y(),
                segment_width,
                inner.size.height,
            );
            let is_selected = index == config.selected;

            if is_selected {
                list.push(DrawOp::FillRect {
                    rect: segment,
                    radius: ctx.dimen.corner_radius,
                    color: ctx.color.accent_background,
                });
                list.push(DrawOp::StrokeRect {
                    rect: segment,
                    radius: ctx.dimen.corner_radius,
                    width: ctx.dimen.border_width,
                    color: ctx.color.border,
                });
            }

            list.push(DrawOp::Text {
                content: (*title).to_owned(),
                origin: Vec2::new(
                    segment.min_x() + ctx.dimen.padding_small,
                    segment.min_y() + ctx.dimen.padding_small,
                ),
                font: ctx.font.body,
                color: if is_selected {
                    ctx.color.accent_foreground
                } else {
                    ctx.color.foreground
                },
            });
        }
        list
    }
}
