use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// The typing field. Greyed out and cursorless while input is not accepted.
pub struct InputField<'a> {
    input: &'a LineInput,
    enabled: bool,
    theme: &'a Theme,
}

impl<'a> InputField<'a> {
    pub fn new(input: &'a LineInput, enabled: bool, theme: &'a Theme) -> Self {
        Self {
            input,
            enabled,
            theme,
        }
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let (border, text_style) = if self.enabled {
            (colors.border_focused(), Style::default().fg(colors.fg()))
        } else {
            (colors.border(), Style::default().fg(colors.disabled()))
        };
        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));

        let (before, at, after) = self.input.render_parts();
        let cursor_style = Style::default()
            .fg(colors.text_cursor_fg())
            .bg(colors.text_cursor_bg());

        let mut spans = vec![Span::styled(before.to_string(), text_style)];
        if self.enabled {
            let at = at.map(String::from).unwrap_or_else(|| " ".to_string());
            spans.push(Span::styled(at, cursor_style));
        } else if let Some(ch) = at {
            spans.push(Span::styled(ch.to_string(), text_style));
        }
        spans.push(Span::styled(after.to_string(), text_style));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
