use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::generator::text::{PracticeText, SEPARATOR};
use crate::session::diff::{CharTag, DiffResult};
use crate::ui::theme::{Theme, ThemeColors};

/// Target text coloured by diff tag, with a block cursor on the next char.
pub struct TypingArea<'a> {
    target: &'a PracticeText,
    diff: &'a DiffResult,
    cursor: Option<usize>,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(target: &'a PracticeText, diff: &'a DiffResult, theme: &'a Theme) -> Self {
        Self {
            target,
            diff,
            cursor: None,
            theme,
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }
}

fn tag_style(tag: CharTag, colors: &ThemeColors) -> Style {
    match tag {
        CharTag::Correct => Style::default().fg(colors.text_correct()),
        CharTag::Incorrect => Style::default()
            .fg(colors.text_incorrect())
            .bg(colors.text_incorrect_bg())
            .add_modifier(Modifier::UNDERLINED),
        CharTag::Neutral => Style::default().fg(colors.text_pending()),
    }
}

/// One span per target character. A tag lookup past the end of the diff is
/// logged and the character keeps the neutral style.
fn build_spans<'t>(
    target: &PracticeText,
    diff: &DiffResult,
    cursor: Option<usize>,
    colors: &ThemeColors,
) -> Vec<Span<'t>> {
    target
        .chars()
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            let tag = diff.tag(i).unwrap_or_else(|err| {
                tracing::warn!(%err, "style skipped");
                CharTag::Neutral
            });

            let style = if cursor == Some(i) {
                Style::default()
                    .fg(colors.text_cursor_fg())
                    .bg(colors.text_cursor_bg())
            } else {
                tag_style(tag, colors)
            };

            // A mistyped separator is invisible as a plain space
            let display = if ch == SEPARATOR && tag == CharTag::Incorrect {
                '\u{00b7}'
            } else {
                ch
            };
            Span::styled(display.to_string(), style)
        })
        .collect()
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let spans = build_spans(self.target, self.diff, self.cursor, colors);

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let paragraph = Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}
