//! Shape math shared by the bar and backdrop styles.

use brute_core::{Rect, Vec2};

/// Where a percent fill grows from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillAlignment {
    /// Grow from the left edge.
    #[default]
    Leading,
    /// Grow outward from the center.
    Center,
    /// Grow from the right edge.
    Trailing,
}

/// The filled portion of a track for a completion fraction.
///
/// `percent` is clamped to `0.0..=1.0`. The returned radius adapts downward
/// so a sliver of fill never rounds past its own half-extent.
pub fn percent_fill(
    track: Rect,
    percent: f32,
    alignment: FillAlignment,
    corner_radius: f32,
) -> (Rect, f32) {
    let clamped = percent.clamp(0.0, 1.0);
    let fill_width = track.size.width * clamped;

    let x = match alignment {
        FillAlignment::Leading => track.min_x(),
        FillAlignment::Trailing => track.max_x() - fill_width,
        FillAlignment::Center => track.mid_x() - fill_width / 2.0,
    };
    let fill = Rect::new(x, track.min_y(), fill_width, track.size.height);

    let radius = corner_radius.min(fill.size.height / 2.0).min(fill.size.width / 2.0);
    (fill, radius)
}

/// The line segments of a square grid covering `rect`.
///
/// `density` is the number of cells along the shorter dimension; the longer
/// dimension gets proportionally more. A density of zero is treated as one.
pub fn grid_segments(rect: Rect, density: usize) -> Vec<(Vec2, Vec2)> {
    let cell = rect.size.min_side() / density.max(1) as f32;
    if cell <= 0.0 {
        return Vec::new();
    }

    // Positions are computed per index; accumulating the step drifts and
    // can drop the far-edge line for inexact cell sizes.
    let steps = |span: f32| (span / cell + 1e-4) as usize;

    let mut segments = Vec::new();
    for i in 0..=steps(rect.size.width) {
        let x = (rect.min_x() + i as f32 * cell).min(rect.max_x());
        segments.push((Vec2::new(x, rect.min_y()), Vec2::new(x, rect.max_y())));
    }
    for i in 0..=steps(rect.size.height) {
        let y = (rect.min_y() + i as f32 * cell).min(rect.max_y());
        segments.push((Vec2::new(rect.min_x(), y), Vec2::new(rect.max_x(), y)));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        let track = Rect::new(0.0, 0.0, 100.0, 20.0);
        let (over, _) = percent_fill(track, 1.6, FillAlignment::Leading, 0.0);
        assert_eq!(over.size.width, 100.0);
        let (under, _) = percent_fill(track, -0.5, FillAlignment::Leading, 0.0);
        assert_eq!(under.size.width, 0.0);
    }

    #[test]
    fn alignment_places_the_fill() {
        let track = Rect::new(0.0, 0.0, 100.0, 20.0);
        let (leading, _) = percent_fill(track, 0.5, FillAlignment::Leading, 0.0);
        assert_eq!(leading.min_x(), 0.0);
        let (trailing, _) = percent_fill(track, 0.5, FillAlignment::Trailing, 0.0);
        assert_eq!(trailing.min_x(), 50.0);
        let (center, _) = percent_fill(track, 0.5, FillAlignment::Center, 0.0);
        assert_eq!(center.min_x(), 25.0);
        assert_eq!(center.max_x(), 75.0);
    }

    #[test]
    fn radius_adapts_to_thin_fills() {
        let track = Rect::new(0.0, 0.0, 100.0, 10.0);
        let (_, radius) = percent_fill(track, 1.0, FillAlignment::Leading, 20.0);
        assert_eq!(radius, 5.0);
        // A 2px sliver cannot round more than 1px.
        let (_, sliver_radius) = percent_fill(track, 0.02, FillAlignment::Leading, 20.0);
        assert_eq!(sliver_radius, 1.0);
    }

    #[test]
    fn grid_cell_size_tracks_the_short_side() {
        let segments = grid_segments(Rect::new(0.0, 0.0, 200.0, 100.0), 10);
        // 10px cells: 21 vertical lines + 11 horizontal lines.
        assert_eq!(segments.len(), 32);
    }

    #[test]
    fn grid_reaches_the_far_edges_for_inexact_cells() {
        // 0.7 / 7 is not exactly representable, so stepped addition lands
        // past the far edge. The boundary lines must still be emitted.
        let rect = Rect::new(0.0, 0.0, 1.0, 0.7);
        let segments = grid_segments(rect, 7);
        assert!(segments
            .iter()
            .any(|(a, b)| a.y == b.y && (a.y - 0.7).abs() < 1e-6));
        assert!(segments
            .iter()
            .any(|(a, b)| a.x == b.x && (a.x - 1.0).abs() < 1e-6));
    }

    #[test]
    fn degenerate_rect_yields_no_segments() {
        assert!(grid_segments(Rect::new(0.0, 0.0, 0.0, 100.0), 8).is_empty());
    }
}
