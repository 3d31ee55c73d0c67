//! Progress bar style.
//!
//! Determinate bars draw a percent fill over the theme background inside a
//! stroked track. Indeterminate bars draw the chunky-blocks pattern: fixed
//! width accent blocks marching across the track, positioned by a caller
//! supplied phase so the style itself stays stateless.

use crate::chrome;
use crate::shape::{self, FillAlignment};
use brute_core::{DisplayList, DrawOp, Rect};
use brute_theme::ThemeEnv;

const BLOCK_WIDTH: f32 = 20.0;
const BLOCK_SPACING: f32 = 15.0;

#[derive(Clone, Debug)]
pub struct ProgressConfig<'a> {
    pub label: Option<&'a str>,
    pub rect: Rect,
    /// Completion fraction in `0.0..=1.0`, or `None` for indeterminate.
    pub fraction: Option<f32>,
    /// Animation phase for the indeterminate pattern, in seconds.
    pub phase: f32,
}

impl<'a> ProgressConfig<'a> {
    pub fn determinate(rect: Rect, fraction: f32) -> Self {
        Self {
            label: None,
            rect,
            fraction: Some(fraction),
            phase: 0.0,
        }
    }

    pub fn indeterminate(rect: Rect, phase: f32) -> Self {
        Self {
            label: None,
            rect,
            fraction: None,
            phase,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }
}

/// Strategy for drawing a progress bar.
pub trait ProgressStyle {
    fn render(&self, config: &ProgressConfig<'_>, env: &ThemeEnv) -> DisplayList;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteProgressStyle;

impl ProgressStyle for BruteProgressStyle {
    fn render(&self, config: &ProgressConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();
        tracing::trace!(fraction = ?config.fraction, "rendering progress bar");

        let mut list = DisplayList::new();

        let mut track = config.rect;
        if let Some(label) = config.label {
            list.push(DrawOp::Text {
                content: label.to_owned(),
                origin: config.rect.origin,
                font: ctx.font.body,
                color: ctx.color.foreground,
            });
            let drop = ctx.font.body.size + ctx.dimen.padding_small;
            track = Rect::new(
                track.min_x(),
                track.min_y() + drop,
                track.size.width,
                (track.size.height - drop).max(0.0),
            );
        }

        list.push(DrawOp::FillRect {
            rect: track,
            radius: ctx.dimen.corner_radius,
            color: ctx.color.background,
        });

        match config.fraction {
            Some(fraction) => {
                let (fill, radius) = shape::percent_fill(
                    track,
                    fraction,
                    FillAlignment::Leading,
                    ctx.dimen.corner_radius,
                );
                list.push(DrawOp::FillRect {
                    rect: fill,
                    radius,
                    color: ctx.color.accent_background,
                });
                list.push(DrawOp::StrokeRect {
                    rect: fill,
                    radius,
                    width: ctx.dimen.border_width,
                    color: ctx.color.border,
                });
            }
            None => {
                let step = BLOCK_WIDTH + BLOCK_SPACING;
                let offset = (config.phase * step) % step;
                let radius = ctx.dimen.corner_radius.min(BLOCK_WIDTH / 2.0);

                let count = (track.size.width / step).ceil() as i32 + 2;
                for i in 0..count {
                    let x = track.min_x() + i as f32 * step + offset - step;
                    if x + BLOCK_WIDTH < track.min_x() - BLOCK_WIDTH
                        || x > track.max_x() + BLOCK_WIDTH
                    {
                        continue;
                    }
                    let block = Rect::new(x, track.min_y(), BLOCK_WIDTH, track.size.height);
                    list.push(DrawOp::FillRect {
                        rect: block,
                        radius,
                        color: ctx.color.accent_background,
                    });
                    list.push(DrawOp::StrokeRect {
                        rect: block,
                        radius,
                        width: ctx.dimen.border_width,
                        color: ctx.color.border,
                    });
                }
            }
        }

        list.push(chrome::stroke(track, &ctx));
        list
    }
}
