use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::generator::GeneratorSettings;
use crate::i18n::{self, Label};
use crate::lifecycle::Phase;
use crate::ui::theme::Theme;

/// Generator settings, language and the start/restart button, in one row.
pub struct Controls<'a> {
    settings: &'a GeneratorSettings,
    phase: Phase,
    theme: &'a Theme,
}

impl<'a> Controls<'a> {
    pub fn new(settings: &'a GeneratorSettings, phase: Phase, theme: &'a Theme) -> Self {
        Self {
            settings,
            phase,
            theme,
        }
    }
}

fn checkbox(checked: bool, label: &str) -> String {
    let mark = if checked { 'x' } else { ' ' };
    format!("[{mark}] {label}")
}

/// Label texts in display order: length, three flags, language, button.
fn control_labels(settings: &GeneratorSettings, phase: Phase) -> [String; 6] {
    let language = settings.language;
    let button = match phase {
        Phase::Idle => Label::Start,
        Phase::Active => Label::Restart,
    };
    [
        format!(
            "{}{}",
            i18n::label(language, Label::LetterCount),
            settings.length.get()
        ),
        checkbox(settings.flags.upper, &i18n::label(language, Label::UpperCase)),
        checkbox(settings.flags.numbers, &i18n::label(language, Label::Numbers)),
        checkbox(
            settings.flags.special,
            &i18n::label(language, Label::SpecialChars),
        ),
        format!("<{language}>"),
        format!("[ {} ]", i18n::label(language, button)),
    ]
}

impl Widget for Controls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let labels = control_labels(self.settings, self.phase);
        let last = labels.len() - 1;
        let mut spans = Vec::with_capacity(labels.len() * 2);
        for (i, text) in labels.into_iter().enumerate() {
            let style = if i == last {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::pool::PoolFlags;
    use crate::i18n::Language;

    #[test]
    fn test_idle_button_reads_start() {
        let labels = control_labels(&GeneratorSettings::default(), Phase::Idle);
        assert_eq!(labels[0], "Length: 30");
        assert_eq!(labels[1], "[ ] Upper case");
        assert_eq!(labels[4], "<EN>");
        assert_eq!(labels[5], "[ Start ]");
    }

    #[test]
    fn test_active_button_reads_restart_in_russian() {
        let settings = GeneratorSettings {
            language: Language::Ru,
            flags: PoolFlags {
                numbers: true,
                ..PoolFlags::default()
            },
            ..GeneratorSettings::default()
        };
        let labels = control_labels(&settings, Phase::Active);
        assert_eq!(labels[2], "[x] Цифры");
        assert_eq!(labels[5], "[ Заново ]");
    }
}
