pub mod pool;
pub mod random;
pub mod text;

use crate::generator::pool::PoolFlags;
use crate::generator::text::{PracticeText, TextLength};
use crate::i18n::Language;

/// Everything that shapes the next practice text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub language: Language,
    pub flags: PoolFlags,
    pub length: TextLength,
}

pub trait TextGenerator {
    fn generate(&mut self, settings: &GeneratorSettings) -> PracticeText;
}
