use ratatui::layout::Position;

use crate::config::Config;
use crate::constants::*;
use crate::models::{CategoryToggles, MetricCategory};

use super::theme::Theme;

/// Central application state - the single source of truth.
///
/// All widget state lives here explicitly (category flags, panel
/// visibility, font size, overlay origin, drag anchor) so the sampler and
/// the toggle logic stay pure and independently testable.
pub struct AppState {
    /// Per-category enabled flags (the checkbox values).
    pub toggles: CategoryToggles,
    /// Whether the checkbox panel is shown. Initial state: hidden.
    pub panel_visible: bool,
    /// Display font size, always within [FONT_SIZE_MIN, FONT_SIZE_MAX].
    font_size: u16,
    /// Overlay card origin (top-left cell).
    pub origin: Position,
    /// Press offset within the card while a drag is in progress.
    drag_anchor: Option<Position>,
    /// The fully rendered metrics text, replaced whole every tick.
    pub display_text: String,
    pub theme: Theme,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            toggles: CategoryToggles::default(),
            panel_visible: false,
            font_size: config.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
            origin: Position::new(config.overlay_x, config.overlay_y),
            drag_anchor: None,
            display_text: String::new(),
            theme,
            tick_count: 0,
        }
    }

    // ── Panel visibility ─────────────────────────────────────────

    /// Flip the checkbox panel's visibility. Category flags are untouched.
    pub fn toggle_panel(&mut self) {
        self.panel_visible = !self.panel_visible;
    }

    /// The toggle button's phrase, derived from the visibility state so
    /// label and state can never disagree.
    pub fn panel_button_label(&self) -> &'static str {
        if self.panel_visible {
            HIDE_PARAMETERS_LABEL
        } else {
            SHOW_PARAMETERS_LABEL
        }
    }

    /// Toggle the category at a checkbox-row index (also the number keys).
    pub fn toggle_category(&mut self, index: usize) {
        if let Some(category) = MetricCategory::from_index(index) {
            self.toggles.toggle(category);
        }
    }

    // ── Font size ────────────────────────────────────────────────

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Set the font size, clamped to the slider range.
    pub fn set_font_size(&mut self, value: u16) {
        self.font_size = value.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    }

    /// Step the font size by a signed delta (keyboard and scroll wheel).
    pub fn bump_font_size(&mut self, delta: i32) {
        let next = (self.font_size as i32 + delta)
            .clamp(FONT_SIZE_MIN as i32, FONT_SIZE_MAX as i32);
        self.font_size = next as u16;
    }

    // ── Drag repositioning ───────────────────────────────────────

    /// Press: record where inside the card the pointer grabbed it.
    pub fn begin_drag(&mut self, pos: Position) {
        self.drag_anchor = Some(Position::new(
            pos.x.saturating_sub(self.origin.x),
            pos.y.saturating_sub(self.origin.y),
        ));
    }

    /// Move: reposition the card by the cumulative drag delta, clamped so
    /// the origin never exceeds `max_origin`. No-op unless a drag is active.
    pub fn drag_to(&mut self, pos: Position, max_origin: Position) {
        if let Some(anchor) = self.drag_anchor {
            self.origin = Position::new(
                pos.x.saturating_sub(anchor.x).min(max_origin.x),
                pos.y.saturating_sub(anchor.y).min(max_origin.y),
            );
        }
    }

    /// Release: clear the anchor (and with it the drag border highlight).
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Nudge the card by one step (arrow keys).
    pub fn move_by(&mut self, dx: i32, dy: i32, max_origin: Position) {
        let x = (self.origin.x as i32 + dx).clamp(0, max_origin.x as i32);
        let y = (self.origin.y as i32 + dy).clamp(0, max_origin.y as i32);
        self.origin = Position::new(x as u16, y as u16);
    }

    // ── Tick ─────────────────────────────────────────────────────

    /// Replace the display text with a freshly rendered sample.
    pub fn update_text(&mut self, text: String) {
        self.display_text = text;
        self.tick_count += 1;
    }

    /// Cycle to the next built-in theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
    }
}
