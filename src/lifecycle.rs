use std::time::Instant;

use tracing::{debug, info};

use crate::generator::pool::PoolFlags;
use crate::generator::text::{PracticeText, TextLength};
use crate::generator::{GeneratorSettings, TextGenerator};
use crate::i18n::Language;
use crate::session::metrics::Metrics;
use crate::session::result::CompletionEvent;
use crate::session::tracker::{Evaluation, SessionTracker};

/// Receives completion events. Display and dismissal are the receiver's business.
pub trait Notifier {
    fn notify(&mut self, event: CompletionEvent);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// Full contents of the input line after an edit.
    KeyInput(String),
    StartRequested,
    LanguageChanged(Language),
}

/// Drives a practice session through start, completion and language switches.
///
/// Once started the controller never returns to `Idle`: a completed text is
/// replaced by a fresh one and counting starts over.
pub struct LifecycleController<G, N> {
    settings: GeneratorSettings,
    tracker: SessionTracker,
    phase: Phase,
    generator: G,
    notifier: N,
}

impl<G: TextGenerator, N: Notifier> LifecycleController<G, N> {
    pub fn new(settings: GeneratorSettings, generator: G, notifier: N) -> Self {
        Self {
            settings,
            tracker: SessionTracker::new(PracticeText::default(), Instant::now()),
            phase: Phase::Idle,
            generator,
            notifier,
        }
    }

    pub fn handle(&mut self, message: Message) -> Option<Evaluation> {
        self.handle_at(message, Instant::now())
    }

    /// Apply one message. Only `KeyInput` accepted while active yields an evaluation.
    pub fn handle_at(&mut self, message: Message, now: Instant) -> Option<Evaluation> {
        match message {
            Message::KeyInput(input) => self.key_input(&input, now),
            Message::StartRequested => {
                self.start_at(now);
                None
            }
            Message::LanguageChanged(language) => {
                self.switch_language_at(language, now);
                None
            }
        }
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Begin a new attempt, discarding any attempt in progress.
    pub fn start_at(&mut self, now: Instant) {
        let target = self.generator.generate(&self.settings);
        let restart = self.phase == Phase::Active;
        info!(
            language = %self.settings.language,
            length = self.settings.length.get(),
            restart,
            "session started"
        );
        self.tracker.reseed(target, now);
        self.phase = Phase::Active;
    }

    pub fn switch_language(&mut self, language: Language) {
        self.switch_language_at(language, Instant::now());
    }

    /// Change the label language; an active session restarts in the new language.
    pub fn switch_language_at(&mut self, language: Language, now: Instant) {
        debug!(from = %self.settings.language, to = %language, "language switched");
        self.settings.language = language;
        if self.phase == Phase::Active {
            self.start_at(now);
        }
    }

    fn key_input(&mut self, input: &str, now: Instant) -> Option<Evaluation> {
        if self.phase != Phase::Active {
            debug!("input ignored while idle");
            return None;
        }
        let evaluation = self.tracker.evaluate_at(input, now);
        if evaluation.completed {
            self.on_complete(&evaluation.metrics, now);
        }
        Some(evaluation)
    }

    fn on_complete(&mut self, metrics: &Metrics, now: Instant) {
        let event = CompletionEvent::new(
            metrics,
            self.tracker.target().to_string(),
            self.settings.language,
            self.tracker.elapsed_at(now),
        );
        info!(
            speed = event.speed,
            accuracy = event.accuracy,
            elapsed_ms = event.elapsed.as_millis() as u64,
            "text completed"
        );
        self.notifier.notify(event);

        let target = self.generator.generate(&self.settings);
        self.tracker.reseed(target, now);
    }

    /// Takes effect on the next generated text.
    pub fn set_length(&mut self, length: TextLength) {
        self.settings.length = length;
    }

    /// Takes effect on the next generated text.
    pub fn set_flags(&mut self, flags: PoolFlags) {
        self.settings.flags = flags;
    }

    pub fn metrics_at(&self, now: Instant) -> Metrics {
        if self.phase == Phase::Idle {
            return Metrics::default();
        }
        self.tracker.metrics_at(now)
    }

    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    pub fn tracker(&self) -> &SessionTracker {
        &self.tracker
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
