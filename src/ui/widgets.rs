use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::theme::Theme;

/// Horizontal font-size slider: filled track up to a knob, dim track after.
///
/// The whole row is the track; the mouse handler maps columns back to
/// values with the inverse of this placement.
pub struct SliderBar<'a> {
    pub min: u16,
    pub max: u16,
    pub value: u16,
    pub theme: &'a Theme,
}

impl<'a> SliderBar<'a> {
    pub fn new(min: u16, max: u16, value: u16, theme: &'a Theme) -> Self {
        Self {
            min,
            max,
            value: value.clamp(min, max),
            theme,
        }
    }
}

impl Widget for SliderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 1 {
            return;
        }

        let span = (self.max - self.min).max(1) as u32;
        let knob = ((self.value - self.min) as u32 * (area.width as u32 - 1) / span) as u16;

        for i in 0..area.width {
            let (ch, style) = if i == knob {
                ('●', Style::default().fg(self.theme.slider_filled))
            } else if i < knob {
                ('─', Style::default().fg(self.theme.slider_filled))
            } else {
                ('─', Style::default().fg(self.theme.slider_track))
            };
            buf.set_string(area.x + i, area.y, ch.to_string(), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    fn symbol_at(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell(Position::new(x, y)).unwrap().symbol()
    }

    #[test]
    fn knob_sits_at_left_edge_for_minimum() {
        let theme = Theme::default_theme();
        let area = Rect::new(0, 0, 17, 1);
        let mut buf = Buffer::empty(area);
        SliderBar::new(8, 24, 8, &theme).render(area, &mut buf);
        assert_eq!(symbol_at(&buf, 0, 0), "●");
        assert_eq!(symbol_at(&buf, 16, 0), "─");
    }

    #[test]
    fn knob_sits_at_right_edge_for_maximum() {
        let theme = Theme::default_theme();
        let area = Rect::new(0, 0, 17, 1);
        let mut buf = Buffer::empty(area);
        SliderBar::new(8, 24, 24, &theme).render(area, &mut buf);
        assert_eq!(symbol_at(&buf, 16, 0), "●");
    }
}
