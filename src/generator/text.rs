use std::fmt;

use crate::error::TrainerError;

pub const GROUP_SIZE: usize = 5;
pub const SEPARATOR: char = ' ';

pub const MIN_LENGTH: u32 = 5;
pub const MAX_LENGTH: u32 = 100;
pub const LENGTH_STEP: u32 = 5;
pub const DEFAULT_LENGTH: u32 = 30;

/// Number of drawn characters in a practice text: 5..=100 in steps of 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TextLength(u32);

impl TextLength {
    pub fn new(value: u32) -> Result<Self, TrainerError> {
        if (MIN_LENGTH..=MAX_LENGTH).contains(&value) && value % LENGTH_STEP == 0 {
            Ok(Self(value))
        } else {
            Err(TrainerError::InvalidLength(value))
        }
    }

    /// Snap an arbitrary value to the nearest valid length.
    pub fn nearest(value: u32) -> Self {
        let clamped = value.clamp(MIN_LENGTH, MAX_LENGTH);
        let snapped = (clamped + LENGTH_STEP / 2) / LENGTH_STEP * LENGTH_STEP;
        Self(snapped.clamp(MIN_LENGTH, MAX_LENGTH))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self((self.0 + LENGTH_STEP).min(MAX_LENGTH))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(LENGTH_STEP).max(MIN_LENGTH))
    }

    /// Length of the text as displayed, separators included.
    pub fn visible_len(self) -> usize {
        let drawn = self.0 as usize;
        drawn + (drawn - 1) / GROUP_SIZE
    }
}

impl Default for TextLength {
    fn default() -> Self {
        Self(DEFAULT_LENGTH)
    }
}

impl From<TextLength> for u32 {
    fn from(length: TextLength) -> Self {
        length.0
    }
}

/// Generated target text. Positions are character positions, not bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PracticeText {
    chars: Vec<char>,
}

impl PracticeText {
    /// Lay out drawn characters in groups of five, separated by single spaces.
    /// No separator follows the final character.
    pub fn from_drawn(drawn: &[char]) -> Self {
        let mut chars = Vec::with_capacity(drawn.len() + drawn.len() / GROUP_SIZE);
        for (i, &ch) in drawn.iter().enumerate() {
            chars.push(ch);
            if (i + 1) % GROUP_SIZE == 0 && i + 1 < drawn.len() {
                chars.push(SEPARATOR);
            }
        }
        Self { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn matches(&self, input: &str) -> bool {
        !self.chars.is_empty() && input.chars().eq(self.chars.iter().copied())
    }
}

impl From<&str> for PracticeText {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl fmt::Display for PracticeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}
