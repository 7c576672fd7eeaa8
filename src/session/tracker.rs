use std::time::{Duration, Instant};

use crate::generator::text::PracticeText;
use crate::session::diff::DiffResult;
use crate::session::metrics::Metrics;

/// Output of one input evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub diff: DiffResult,
    pub metrics: Metrics,
    /// The input matched the target exactly. Metrics are those of the finished attempt.
    pub completed: bool,
}

/// State of one typing attempt against a target text.
///
/// Counts are recomputed from the whole input on every evaluation, so
/// `total` always equals the number of characters typed and `correct` can
/// never exceed it.
#[derive(Clone, Debug)]
pub struct SessionTracker {
    target: PracticeText,
    input: String,
    correct: usize,
    total: usize,
    started_at: Instant,
}

impl SessionTracker {
    pub fn new(target: PracticeText, now: Instant) -> Self {
        Self {
            target,
            input: String::new(),
            correct: 0,
            total: 0,
            started_at: now,
        }
    }

    pub fn evaluate(&mut self, input: &str) -> Evaluation {
        self.evaluate_at(input, Instant::now())
    }

    pub fn evaluate_at(&mut self, input: &str, now: Instant) -> Evaluation {
        let typed: Vec<char> = input.chars().collect();
        let diff = DiffResult::compute(&self.target, &typed);

        self.input = input.to_string();
        self.total = typed.len();
        self.correct = diff.correct_count();

        Evaluation {
            metrics: self.metrics_at(now),
            completed: self.target.matches(input),
            diff,
        }
    }

    /// Swap in a new target and start counting from zero.
    pub fn reseed(&mut self, target: PracticeText, now: Instant) {
        *self = Self::new(target, now);
    }

    pub fn metrics_at(&self, now: Instant) -> Metrics {
        Metrics::compute(self.correct, self.total, self.elapsed_at(now))
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Diff of the stored input against the current target.
    pub fn diff(&self) -> DiffResult {
        let typed: Vec<char> = self.input.chars().collect();
        DiffResult::compute(&self.target, &typed)
    }

    pub fn target(&self) -> &PracticeText {
        &self.target
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }
}
