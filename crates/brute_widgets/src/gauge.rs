//! Gauge style: a labeled percent-fill bar with optional bound labels.

use crate::chrome;
use crate::shape::{self, FillAlignment};
use brute_core::{DisplayList, DrawOp, Rect, Vec2};
use brute_theme::ThemeEnv;

#[derive(Clone, Debug)]
pub struct GaugeConfig<'a> {
    pub label: &'a str,
    pub rect: Rect,
    /// Position within the gauge's range, in `0.0..=1.0`.
    pub value: f32,
    pub current_value_label: Option<&'a str>,
    pub minimum_value_label: Option<&'a str>,
    pub maximum_value_label: Option<&'a str>,
}

impl<'a> GaugeConfig<'a> {
    pub fn new(label: &'a str, rect: Rect, value: f32) -> Self {
        Self {
            label,
            rect,
            value,
            current_value_label: None,
            minimum_value_label: None,
            maximum_value_label: None,
        }
    }

    pub fn current_value_label(mut self, label: &'a str) -> Self {
        self.current_value_label = Some(label);
        self
    }

    pub fn bounds_labels(mut self, minimum: &'a str, maximum: &'a str) -> Self {
        self.minimum_value_label = Some(minimum);
        self.maximum_value_label = Some(maximum);
        self
    }
}

/// Strategy for drawing a gauge.
pub trait GaugeStyle {
    fn render(&self, config: &GaugeConfig<'_>, env: &ThemeEnv) -> DisplayList;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteGaugeStyle;

impl GaugeStyle for BruteGaugeStyle {
    fn render(&self, config: &GaugeConfig<'_>, env: &ThemeEnv) -> DisplayList {
        let ctx = env.context();

        let mut list = DisplayList::new();
        list.push(DrawOp::Text {
            content: config.label.to_owned(),
            origin: config.rect.origin,
            font: ctx.font.body,
            color: ctx.color.foreground,
        });

        let headroom = ctx.font.body.size + ctx.dimen.padding_small;
        let footroom = if config.minimum_value_label.is_some()
            || config.maximum_value_label.is_some()
        {
            ctx.font.caption.size + ctx.dimen.padding_small
        } else {
            0.0
        };
        let track = Rect::new(
            config.rect.min_x(),
            config.rect.min_y() + headroom,
            config.rect.size.width,
            (config.rect.size.height - headroom - footroom).max(0.0),
        );

        list.push(DrawOp::FillRect {
            rect: track,
            radius: ctx.dimen.corner_radius,
            color: ctx.color.background,
        });
        let (fill, radius) = shape::percent_fill(
            track,
            config.value,
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
        list.push(chrome::stroke(track, &ctx));

        // Current value sits on the bar itself.
        if let Some(value_label) = config.current_value_label {
            list.push(DrawOp::Text {
                content: value_label.to_owned(),
                origin: Vec2::new(
                    track.min_x() + ctx.dimen.padding_small,
                    track.min_y() + ctx.dimen.padding_small,
                ),
                font: ctx.font.caption,
                color: ctx.color.foreground,
            });
        }

        let bounds_y = track.max_y() + ctx.dimen.padding_small;
        if let Some(minimum) = config.minimum_value_label {
            list.push(DrawOp::Text {
                content: minimum.to_owned(),
                origin: Vec2::new(track.min_x(), bounds_y),
                font: ctx.font.caption,
                color: ctx.color.foreground,
            });
        }
        if let Some(maximum) = config.maximum_value_label {
            list.push(DrawOp::Text {
                content: maximum.to_owned(),
                origin: Vec2::new(track.max_x(), bounds_y),
                font: ctx.font.caption,
                color: ctx.color.foreground,
            });
        }

        list
    }
}
