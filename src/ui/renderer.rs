//! Draws the overlay card: metrics text, toggle button, checkbox panel,
//! and font-size slider, at the current origin.

use ratatui::{
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::*;
use crate::models::MetricCategory;

use super::layout::OverlayLayout;
use super::state::AppState;
use super::widgets::SliderBar;

/// Top-level render function. The rest of the frame is left untouched;
/// the card is cleared and redrawn whole at its current origin.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let layout = OverlayLayout::compute(state, area);
    let theme = &state.theme;

    frame.render_widget(Clear, layout.outer);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(state.is_dragging()));
    frame.render_widget(block, layout.outer);

    let text = Paragraph::new(state.display_text.as_str()).style(theme.text_style());
    frame.render_widget(text, layout.text);

    let label = format!("[ {} ]", state.panel_button_label());
    let button =
        Paragraph::new(Line::from(Span::styled(label, theme.button_style()))).centered();
    frame.render_widget(button, layout.button);

    if let Some(boxes) = layout.checkboxes {
        let lines: Vec<Line> = MetricCategory::all()
            .iter()
            .map(|&cat| {
                let (mark, style) = if state.toggles.is_enabled(cat) {
                    ("[x] ", theme.checkbox_style())
                } else {
                    ("[ ] ", theme.checkbox_dim_style())
                };
                Line::from(vec![
                    Span::styled(mark, style.add_modifier(Modifier::BOLD)),
                    Span::styled(cat.label(), style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), boxes);
    }

    frame.render_widget(
        SliderBar::new(FONT_SIZE_MIN, FONT_SIZE_MAX, state.font_size(), theme),
        layout.slider,
    );
}
