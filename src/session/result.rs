use std::time::Duration;

use crate::i18n::{self, Language};
use crate::session::metrics::Metrics;

/// Raised when the typed input exactly matches the target text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionEvent {
    pub speed: u32,
    pub accuracy: u32,
    pub text: String,
    pub language: Language,
    pub elapsed: Duration,
}

impl CompletionEvent {
    /// Snapshot the final metrics of a finished attempt.
    pub fn new(metrics: &Metrics, text: String, language: Language, elapsed: Duration) -> Self {
        Self {
            speed: metrics.speed,
            accuracy: metrics.accuracy,
            text,
            language,
            elapsed,
        }
    }

    pub fn message(&self) -> String {
        i18n::completion_message(self.language, self.speed, self.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_copies_final_metrics() {
        let metrics = Metrics {
            speed: 240,
            accuracy: 100,
            correct: 11,
            total: 11,
        };
        let event = CompletionEvent::new(
            &metrics,
            "abcde fghij".to_string(),
            Language::En,
            Duration::from_millis(2750),
        );
        assert_eq!(event.speed, 240);
        assert_eq!(event.accuracy, 100);
        assert!(event.message().contains("Speed: 240 chars/min"));
    }

    #[test]
    fn test_message_follows_event_language() {
        let event = CompletionEvent::new(
            &Metrics::default(),
            String::new(),
            Language::Ru,
            Duration::ZERO,
        );
        assert!(event.message().starts_with("Поздравляем!"));
    }
}
