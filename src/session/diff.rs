use crate::error::TrainerError;
use crate::generator::text::PracticeText;

/// Display class of one target character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharTag {
    Correct,
    Incorrect,
    /// Not reached yet.
    Neutral,
}

/// One tag per target character, aligned with the target's positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffResult {
    tags: Vec<CharTag>,
}

impl DiffResult {
    /// Classify every target position against the typed input.
    pub fn compute(target: &PracticeText, input: &[char]) -> Self {
        let tags = target
            .chars()
            .iter()
            .enumerate()
            .map(|(i, &expected)| match input.get(i) {
                Some(&typed) if typed == expected => CharTag::Correct,
                Some(_) => CharTag::Incorrect,
                None => CharTag::Neutral,
            })
            .collect();
        Self { tags }
    }

    /// All tags left neutral, for a text nothing has been typed against.
    pub fn untouched(target: &PracticeText) -> Self {
        Self {
            tags: vec![CharTag::Neutral; target.len()],
        }
    }

    pub fn tags(&self) -> &[CharTag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tag(&self, index: usize) -> Result<CharTag, TrainerError> {
        self.tags
            .get(index)
            .copied()
            .ok_or(TrainerError::OutOfBounds {
                index,
                len: self.tags.len(),
            })
    }

    pub fn correct_count(&self) -> usize {
        self.tags
            .iter()
            .filter(|tag| matches!(tag, CharTag::Correct))
            .count()
    }
}
