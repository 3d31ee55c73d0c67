//! The style registry and backdrop.
//!
//! `StyleSheet` bundles a default style for every control family so an app
//! can render its whole surface through one object, swapping individual
//! styles where a screen wants something different.

use crate::button::{BruteButtonStyle, ButtonStyle};
use crate::gauge::{BruteGaugeStyle, GaugeStyle};
use crate::label::{BadgeLabelStyle, BruteBadgeLabelStyle};
use crate::picker::{PickerStyle, SegmentedPickerStyle};
use crate::progress::{BruteProgressStyle, ProgressStyle};
use crate::shape;
use crate::text_field::{BruteTextFieldStyle, TextFieldStyle};
use crate::toggle::{BruteSwitchToggleStyle, ToggleStyle};
use brute_core::{DisplayList, DrawOp, Rect};
use brute_theme::ThemeEnv;

/// Cells along the backdrop grid's shorter dimension.
const BACKDROP_GRID_DENSITY: usize = 8;

/// Opacity of the backdrop grid lines.
const BACKDROP_GRID_OPACITY: f32 = 0.15;

/// Default styles for every control family.
pub struct StyleSheet {
    pub button: Box<dyn ButtonStyle>,
    pub toggle: Box<dyn ToggleStyle>,
    pub progress: Box<dyn ProgressStyle>,
    pub gauge: Box<dyn GaugeStyle>,
    pub picker: Box<dyn PickerStyle>,
    pub badge: Box<dyn BadgeLabelStyle>,
    pub text_field: Box<dyn TextFieldStyle>,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            button: Box::new(BruteButtonStyle),
            toggle: Box::new(BruteSwitchToggleStyle),
            progress: Box::new(BruteProgressStyle),
            gauge: Box::new(BruteGaugeStyle),
            picker: Box::new(SegmentedPickerStyle),
            badge: Box::new(BruteBadgeLabelStyle::default()),
            text_field: Box::new(BruteTextFieldStyle),
        }
    }
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, style: impl ButtonStyle + 'static) -> Self {
        self.button = Box::new(style);
        self
    }

    pub fn with_toggle(mut self, style: impl ToggleStyle + 'static) -> Self {
        self.toggle = Box::new(style);
        self
    }

    pub fn with_progress(mut self, style: impl ProgressStyle + 'static) -> Self {
        self.progress = Box::new(style);
        self
    }

    pub fn with_gauge(mut self, style: impl GaugeStyle + 'static) -> Self {
        self.gauge = Box::new(style);
        self
    }

    pub fn with_picker(mut self, style: impl PickerStyle + 'static) -> Self {
        self.picker = Box::new(style);
        self
    }

    pub fn with_badge(mut self, style: impl BadgeLabelStyle + 'static) -> Self {
        self.badge = Box::new(style);
        self
    }

    pub fn with_text_field(mut self, style: impl TextFieldStyle + 'static) -> Self {
        self.text_field = Box::new(style);
        self
    }
}

/// The screen backdrop: theme background with a faint grid overlay.
pub fn render_backdrop(rect: Rect, env: &ThemeEnv) -> DisplayList {
    let ctx = env.context();

    let mut list = DisplayList::new();
    list.push(DrawOp::FillRect {
        rect,
        radius: 0.0,
        color: ctx.color.background,
    });

    let grid_color = ctx.color.foreground.with_alpha(BACKDROP_GRID_OPACITY);
    for (from, to) in shape::grid_segments(rect, BACKDROP_GRID_DENSITY) {
        list.push(DrawOp::Line {
            from,
            to,
            width: 1.0,
            color: grid_color,
        });
    }
    list
}
