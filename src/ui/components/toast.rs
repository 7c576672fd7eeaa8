use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::i18n::{self, Label};
use crate::lifecycle::Notifier;
use crate::session::result::CompletionEvent;
use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    shown_at: Instant,
}

/// Completion notices waiting to be shown, and the one on screen.
///
/// `notify` only enqueues; a notice appears on the next `poll` and is
/// dropped once it has been visible for [`TOAST_DURATION`].
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<CompletionEvent>,
    visible: Option<Toast>,
}

impl Notifier for ToastQueue {
    fn notify(&mut self, event: CompletionEvent) {
        self.pending.push_back(event);
    }
}

impl ToastQueue {
    pub fn poll(&mut self, now: Instant) {
        if let Some(toast) = &self.visible {
            if now.saturating_duration_since(toast.shown_at) >= TOAST_DURATION {
                tracing::debug!("toast dismissed");
                self.visible = None;
            }
        }
        if self.visible.is_none() {
            if let Some(event) = self.pending.pop_front() {
                self.visible = Some(Toast {
                    title: i18n::label(event.language, Label::Title),
                    message: event.message(),
                    shown_at: now,
                });
            }
        }
    }

    pub fn visible(&self) -> Option<&Toast> {
        self.visible.as_ref()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

pub struct ToastView<'a> {
    toast: &'a Toast,
    theme: &'a Theme,
}

impl<'a> ToastView<'a> {
    pub fn new(toast: &'a Toast, theme: &'a Theme) -> Self {
        Self { toast, theme }
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lines: Vec<Line> = self.toast.message.lines().map(Line::from).collect();
        let width = lines
            .iter()
            .map(|line| line.width() as u16)
            .max()
            .unwrap_or(0)
            .saturating_add(4)
            .max(self.toast.title.chars().count() as u16 + 6);
        let height = lines.len() as u16 + 2;
        let popup = centered_rect(width, height, area);

        Clear.render(popup, buf);
        let block = Block::bordered()
            .title(format!(" {} ", self.toast.title))
            .border_style(Style::default().fg(colors.success()))
            .style(Style::default().bg(colors.bg()).fg(colors.fg()));
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(popup, buf);
    }
}
