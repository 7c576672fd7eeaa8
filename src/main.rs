use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use keytrainer::app::{App, Flag};
use keytrainer::config::Config;
use keytrainer::event::{AppEvent, EventHandler};
use keytrainer::i18n::Language;
use keytrainer::telemetry;
use keytrainer::ui::components::controls::Controls;
use keytrainer::ui::components::input_field::InputField;
use keytrainer::ui::components::toast::ToastView;
use keytrainer::ui::components::typing_area::TypingArea;
use keytrainer::ui::layout::{AppLayout, pack_hint_lines};
use keytrainer::ui::theme::Theme;

const HINTS: &[&str] = &[
    "[Enter/F5] Start",
    "[F2] Language",
    "[F3/F4] Length -/+",
    "[F6] Upper",
    "[F7] Numbers",
    "[F8] Special",
    "[Esc] Quit",
];

#[derive(Parser)]
#[command(name = "keytrainer", version, about = "Terminal keyboard trainer")]
struct Cli {
    #[arg(short, long, help = "Interface and text language (EN, RU)")]
    language: Option<Language>,

    #[arg(short = 'n', long, help = "Characters per text (5-100, step 5)")]
    length: Option<u32>,

    #[arg(long, overrides_with = "no_upper", help = "Include upper case letters")]
    upper: bool,

    #[arg(long, overrides_with = "upper", help = "Exclude upper case letters")]
    no_upper: bool,

    #[arg(long, overrides_with = "no_numbers", help = "Include digits")]
    numbers: bool,

    #[arg(long, overrides_with = "numbers", help = "Exclude digits")]
    no_numbers: bool,

    #[arg(long, overrides_with = "no_special", help = "Include punctuation and symbols")]
    special: bool,

    #[arg(long, overrides_with = "special", help = "Exclude punctuation and symbols")]
    no_special: bool,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,
}

/// `Some` only when one of a `--x` / `--no-x` pair was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    /// Overrides for this run only; they never reach the saved file.
    fn apply(&self, config: &mut Config) {
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(upper) = switch(self.upper, self.no_upper) {
            config.include_upper_case = upper;
        }
        if let Some(numbers) = switch(self.numbers, self.no_numbers) {
            config.include_numbers = numbers;
        }
        if let Some(special) = switch(self.special, self.no_special) {
            config.include_special_chars = special;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        config.normalize();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = Config::config_path();
    let (saved, load_error) = match Config::load_from(&config_path) {
        Ok(config) => (Some(config), None),
        Err(err) => (None, Some(err)),
    };
    let mut config = saved.clone().unwrap_or_default();
    cli.apply(&mut config);
    if let Err(err) = telemetry::init_tracing(&config) {
        eprintln!("keytrainer: logging disabled: {err:#}");
    }
    if let Some(err) = &load_error {
        eprintln!(
            "keytrainer: {} unreadable, using defaults and leaving it unchanged: {err:#}",
            config_path.display()
        );
        tracing::warn!(error = %err, "config unreadable, using defaults");
    }

    let theme = Theme::load(&config.theme).unwrap_or_default();
    let mut app = App::new(config, saved, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let keyboard_enhanced = execute!(
        io::stdout(),
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .is_ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    if keyboard_enhanced {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match app.save_settings(&config_path) {
        Ok(true) => tracing::info!(path = %config_path.display(), "settings saved"),
        Ok(false) => {}
        Err(err) => tracing::warn!(error = %err, "failed to save settings"),
    }

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Paste(text) => app.on_paste(&text),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Release and Repeat would double-count with enhanced keyboard reporting
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('l') if ctrl => app.cycle_language(),
        KeyCode::Esc => app.quit(),
        KeyCode::Enter | KeyCode::F(5) => app.start(),
        KeyCode::F(2) => app.cycle_language(),
        KeyCode::F(3) => app.change_length(false),
        KeyCode::F(4) => app.change_length(true),
        KeyCode::F(6) => app.toggle_flag(Flag::Upper),
        KeyCode::F(7) => app.toggle_flag(Flag::Numbers),
        KeyCode::F(8) => app.toggle_flag(Flag::Special),
        _ => app.on_input_key(key),
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let hints = pack_hint_lines(HINTS, area.width as usize);
    let layout = AppLayout::new(area, hints.len() as u16);

    let header = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", app.title()),
        Style::default()
            .fg(colors.header_fg())
            .bg(colors.header_bg())
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);

    let tracker = app.controller.tracker();
    let typing = TypingArea::new(tracker.target(), &app.diff, &app.theme).cursor(app.text_cursor());
    frame.render_widget(typing, layout.text);

    let input = InputField::new(&app.input, app.controller.accepts_input(), &app.theme);
    frame.render_widget(input, layout.input);

    let controls = Controls::new(app.controller.settings(), app.controller.phase(), &app.theme);
    frame.render_widget(controls, layout.controls);

    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.stats_line()),
        Style::default().fg(colors.fg()),
    )));
    frame.render_widget(status, layout.status);

    let footer_lines: Vec<Line> = hints
        .into_iter()
        .map(|hint| Line::from(Span::styled(hint, Style::default().fg(colors.text_pending()))))
        .collect();
    frame.render_widget(Paragraph::new(footer_lines), layout.footer);

    if let Some(toast) = app.controller.notifier().visible() {
        frame.render_widget(ToastView::new(toast, &app.theme), area);
    }
}
