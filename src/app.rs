use std::path::Path;
use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::generator::pool::PoolFlags;
use crate::generator::random::RandomGenerator;
use crate::i18n::{self, Label};
use crate::lifecycle::{LifecycleController, Message, Phase};
use crate::session::diff::DiffResult;
use crate::session::metrics::Metrics;
use crate::ui::components::toast::ToastQueue;
use crate::ui::line_input::{InputResult, LineInput};
use crate::ui::theme::Theme;

pub type Controller = LifecycleController<RandomGenerator, ToastQueue>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Upper,
    Numbers,
    Special,
}

/// Terminal-side state: the controller plus what the screen shows of it.
///
/// `config` is the running configuration (file plus command-line overrides).
/// `saved` is the file as loaded, or `None` when it could not be parsed; only
/// changes made through the controls are written back to it.
pub struct App {
    pub controller: Controller,
    pub input: LineInput,
    pub diff: DiffResult,
    pub metrics: Metrics,
    pub config: Config,
    pub theme: Theme,
    pub should_quit: bool,
    saved: Option<Config>,
    settings_changed: bool,
}

impl App {
    pub fn new(config: Config, saved: Option<Config>, theme: Theme) -> Self {
        Self::with_generator(config, saved, theme, RandomGenerator::from_entropy())
    }

    pub fn with_generator(
        config: Config,
        saved: Option<Config>,
        theme: Theme,
        generator: RandomGenerator,
    ) -> Self {
        let controller =
            LifecycleController::new(config.generator_settings(), generator, ToastQueue::default());
        Self {
            controller,
            input: LineInput::new(0),
            diff: DiffResult::default(),
            metrics: Metrics::default(),
            config,
            theme,
            should_quit: false,
            saved,
            settings_changed: false,
        }
    }

    pub fn start(&mut self) {
        self.controller.handle(Message::StartRequested);
        self.sync_fresh_text();
    }

    pub fn cycle_language(&mut self) {
        let next = self.controller.language().next();
        self.controller.handle(Message::LanguageChanged(next));
        if self.controller.phase() == Phase::Active {
            self.sync_fresh_text();
        }
        self.record_setting(|config| config.language = next);
    }

    pub fn change_length(&mut self, longer: bool) {
        let current = self.controller.settings().length;
        let length = if longer {
            current.increment()
        } else {
            current.decrement()
        };
        self.controller.set_length(length);
        self.record_setting(|config| config.length = u32::from(length));
    }

    pub fn toggle_flag(&mut self, flag: Flag) {
        let mut flags: PoolFlags = self.controller.settings().flags;
        match flag {
            Flag::Upper => flags.upper = !flags.upper,
            Flag::Numbers => flags.numbers = !flags.numbers,
            Flag::Special => flags.special = !flags.special,
        }
        self.controller.set_flags(flags);
        self.record_setting(|config| match flag {
            Flag::Upper => config.include_upper_case = flags.upper,
            Flag::Numbers => config.include_numbers = flags.numbers,
            Flag::Special => config.include_special_chars = flags.special,
        });
    }

    /// Route an editing key to the input line and evaluate the new text.
    pub fn on_input_key(&mut self, key: KeyEvent) {
        if !self.controller.accepts_input() {
            return;
        }
        if self.input.handle(key) == InputResult::Edited {
            self.evaluate_input();
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        if !self.controller.accepts_input() {
            return;
        }
        if self.input.insert_str(text) == InputResult::Edited {
            self.evaluate_input();
        }
    }

    /// Write control-made changes to `path`. Returns whether anything was
    /// written; nothing is when the loaded file was unreadable.
    pub fn save_settings(&mut self, path: &Path) -> anyhow::Result<bool> {
        if !self.settings_changed {
            return Ok(false);
        }
        let Some(saved) = &self.saved else {
            return Ok(false);
        };
        saved.save_to(path)?;
        self.settings_changed = false;
        Ok(true)
    }

    fn evaluate_input(&mut self) {
        let message = Message::KeyInput(self.input.value().to_string());
        if let Some(evaluation) = self.controller.handle(message) {
            if evaluation.completed {
                self.sync_fresh_text();
                // finished attempt stays on the stats line until the next key
                self.metrics = evaluation.metrics;
            } else {
                self.diff = evaluation.diff;
                self.metrics = evaluation.metrics;
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.controller.notifier_mut().poll(now);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn title(&self) -> String {
        i18n::label(self.controller.language(), Label::Title)
    }

    pub fn stats_line(&self) -> String {
        i18n::stats_line(
            self.controller.language(),
            self.metrics.speed,
            self.metrics.accuracy,
        )
    }

    /// Target position under the input line's edit point, while a session runs.
    pub fn text_cursor(&self) -> Option<usize> {
        match self.controller.phase() {
            Phase::Active => Some(self.input.cursor()),
            Phase::Idle => None,
        }
    }

    fn sync_fresh_text(&mut self) {
        let tracker = self.controller.tracker();
        self.input.reset(tracker.target().len());
        self.diff = DiffResult::untouched(tracker.target());
        self.metrics = Metrics::default();
    }

    fn record_setting(&mut self, apply: impl Fn(&mut Config)) {
        apply(&mut self.config);
        if let Some(saved) = &mut self.saved {
            apply(saved);
        }
        self.settings_changed = true;
    }
}
