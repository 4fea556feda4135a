use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::constants::*;
use crate::models::MetricCategory;

use super::state::AppState;

/// Where a mouse press landed inside the overlay card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The show/hide parameters button.
    Button,
    /// A category checkbox row.
    Checkbox(MetricCategory),
    /// The font-size slider, with the value the pressed column maps to.
    Slider(u16),
    /// Anywhere else on the card: grab it for dragging.
    Body,
}

/// Computed geometry of the overlay card for one frame.
///
/// Shared between the renderer and the mouse handler so clicks are
/// resolved against exactly what was drawn.
#[derive(Debug, Clone, Copy)]
pub struct OverlayLayout {
    pub outer: Rect,
    pub text: Rect,
    pub button: Rect,
    /// Checkbox rows; None while the panel is hidden.
    pub checkboxes: Option<Rect>,
    pub slider: Rect,
}

impl OverlayLayout {
    /// Compute the card geometry from the current state, clamped to the
    /// frame area. The card width scales with the font size.
    pub fn compute(state: &AppState, area: Rect) -> Self {
        let text_rows = state.display_text.lines().count().max(1) as u16;
        let panel_rows = if state.panel_visible {
            MetricCategory::COUNT as u16
        } else {
            0
        };

        let longest_line = state
            .display_text
            .lines()
            .map(|l| l.width())
            .max()
            .unwrap_or(0) as u16;
        let width = (OVERLAY_BASE_WIDTH + OVERLAY_WIDTH_PER_FONT * state.font_size())
            .max(longest_line + 2)
            .min(area.width.max(1));

        // borders + text + button + checkboxes + slider
        let height = (2 + text_rows + 1 + panel_rows + 1).min(area.height.max(1));

        let x = state.origin.x.min(area.width.saturating_sub(width));
        let y = state.origin.y.min(area.height.saturating_sub(height));
        let outer = Rect::new(x, y, width, height);

        let inner = Rect::new(
            outer.x + 1,
            outer.y + 1,
            outer.width.saturating_sub(2),
            outer.height.saturating_sub(2),
        );
        let row = |offset: u16, rows: u16| {
            Rect::new(inner.x, inner.y + offset, inner.width, rows).intersection(inner)
        };

        let text = row(0, text_rows);
        let button = row(text_rows, 1);
        let checkboxes = if panel_rows > 0 {
            Some(row(text_rows + 1, panel_rows))
        } else {
            None
        };
        let slider = row(text_rows + 1 + panel_rows, 1);

        Self {
            outer,
            text,
            button,
            checkboxes,
            slider,
        }
    }

    /// Largest origin that keeps a card of this size fully on screen.
    pub fn max_origin(&self, area: Rect) -> Position {
        Position::new(
            area.width.saturating_sub(self.outer.width),
            area.height.saturating_sub(self.outer.height),
        )
    }

    /// Resolve a mouse position to a card control, or None when the press
    /// landed outside the card entirely.
    pub fn hit_test(&self, pos: Position) -> Option<HitTarget> {
        if !self.outer.contains(pos) {
            return None;
        }
        if self.button.contains(pos) {
            return Some(HitTarget::Button);
        }
        if let Some(boxes) = self.checkboxes {
            if boxes.contains(pos) {
                let index = (pos.y - boxes.y) as usize;
                if let Some(category) = MetricCategory::from_index(index) {
                    return Some(HitTarget::Checkbox(category));
                }
            }
        }
        if self.slider.contains(pos) {
            return Some(HitTarget::Slider(self.slider_value_at(pos.x)));
        }
        Some(HitTarget::Body)
    }

    /// Map a column on the slider row to a font size: the leftmost cell is
    /// the minimum, the rightmost the maximum, linear in between.
    pub fn slider_value_at(&self, x: u16) -> u16 {
        let track = self.slider;
        if track.width <= 1 {
            return FONT_SIZE_MIN;
        }
        let offset = x.saturating_sub(track.x).min(track.width - 1) as u32;
        let span = (FONT_SIZE_MAX - FONT_SIZE_MIN) as u32;
        let value = FONT_SIZE_MIN as u32 + (offset * span + (track.width as u32 - 1) / 2) / (track.width as u32 - 1);
        value as u16
    }
}
