//! Label lookup for the supported interface languages.
//!
//! Strings live in `locales/<code>.yml` and are compiled in by `rust-i18n`.
//! Every locale must provide the full [`Label`] set. The `speed` entry is a
//! template with `%{speed}` and `%{accuracy}` placeholders and exactly one
//! [`SPEED_SEPARATOR`], which splits it into a speed segment and an accuracy
//! segment for the completion notification. New locales must keep that
//! single separator.

use std::fmt;
use std::str::FromStr;

use rust_i18n::t;
use serde::{Deserialize, Serialize};

use crate::error::TrainerError;

pub const SPEED_SEPARATOR: char = '|';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "EN", alias = "en")]
    En,
    #[serde(rename = "RU", alias = "ru")]
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ru => "RU",
        }
    }

    /// Next language in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrainerError::UnknownLanguage(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Title,
    Start,
    Restart,
    Speed,
    Congrats,
    LetterCount,
    UpperCase,
    Numbers,
    SpecialChars,
}

impl Label {
    pub const ALL: [Label; 9] = [
        Label::Title,
        Label::Start,
        Label::Restart,
        Label::Speed,
        Label::Congrats,
        Label::LetterCount,
        Label::UpperCase,
        Label::Numbers,
        Label::SpecialChars,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Label::Title => "title",
            Label::Start => "start",
            Label::Restart => "restart",
            Label::Speed => "speed",
            Label::Congrats => "congrats",
            Label::LetterCount => "letterCount",
            Label::UpperCase => "upperCase",
            Label::Numbers => "numbers",
            Label::SpecialChars => "specialChars",
        }
    }
}

pub fn label(language: Language, label: Label) -> String {
    t!(label.key(), locale = language.locale()).into_owned()
}

/// The stats line: the `speed` template filled in with current values.
pub fn stats_line(language: Language, speed: u32, accuracy: u32) -> String {
    t!(
        "speed",
        locale = language.locale(),
        speed = speed,
        accuracy = accuracy
    )
    .into_owned()
}

/// Split a rendered stats line into its speed and accuracy segments.
///
/// Returns `None` unless the line holds exactly one separator.
pub fn speed_segments(line: &str) -> Option<(&str, &str)> {
    let (speed, accuracy) = line.split_once(SPEED_SEPARATOR)?;
    if accuracy.contains(SPEED_SEPARATOR) {
        return None;
    }
    Some((speed.trim(), accuracy.trim()))
}

/// Text shown when the user completes a practice text.
pub fn completion_message(language: Language, speed: u32, accuracy: u32) -> String {
    let congrats = label(language, Label::Congrats);
    let line = stats_line(language, speed, accuracy);
    match speed_segments(&line) {
        Some((speed_part, accuracy_part)) => format!("{congrats}\n{speed_part}\n{accuracy_part}"),
        None => {
            tracing::warn!(
                locale = language.locale(),
                template = %line,
                "speed template does not hold exactly one separator"
            );
            format!("{congrats}\n{line}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_resolves_in_every_language() {
        for language in Language::ALL {
            for key in Label::ALL {
                let text = label(language, key);
                assert!(!text.is_empty());
                // rust-i18n echoes the key path when a translation is missing
                assert_ne!(text, format!("{}.{}", language.locale(), key.key()));
            }
        }
    }

    #[test]
    fn test_stats_line_fills_placeholders() {
        let line = stats_line(Language::En, 200, 95);
        assert_eq!(line, "Speed: 200 chars/min | Accuracy: 95%");
    }

    #[test]
    fn test_russian_stats_line() {
        let line = stats_line(Language::Ru, 0, 0);
        assert_eq!(line, "Скорость: 0 зн/мин | Точность: 0%");
    }

    #[test]
    fn test_speed_segments_requires_single_separator() {
        assert_eq!(speed_segments("a | b"), Some(("a", "b")));
        assert_eq!(speed_segments("a b"), None);
        assert_eq!(speed_segments("a | b | c"), None);
    }

    #[test]
    fn test_completion_message_has_three_lines() {
        let message = completion_message(Language::En, 180, 97);
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Congratulations! You've completed the text!",
                "Speed: 180 chars/min",
                "Accuracy: 97%",
            ]
        );
    }

    #[test]
    fn test_language_parse_is_case_insensitive() {
        assert_eq!("ru".parse::<Language>(), Ok(Language::Ru));
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!(
            "de".parse::<Language>(),
            Err(TrainerError::UnknownLanguage("de".to_string()))
        );
    }

    #[test]
    fn test_language_cycle() {
        assert_eq!(Language::En.next(), Language::Ru);
        assert_eq!(Language::Ru.next(), Language::En);
    }
}
