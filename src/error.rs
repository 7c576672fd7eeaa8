use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainerError {
    #[error("position {index} is outside text of length {len}")]
    OutOfBounds { index: usize, len: usize },

    #[error("text length {0} must be a multiple of 5 between 5 and 100")]
    InvalidLength(u32),

    #[error("unknown language {0:?} (expected EN or RU)")]
    UnknownLanguage(String),
}
