use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::generator::pool::CharacterPool;
use crate::generator::text::{PracticeText, TextLength};
use crate::generator::{GeneratorSettings, TextGenerator};

/// Draw `length` characters uniformly, with replacement, and group them.
pub fn generate_text<R: Rng + ?Sized>(
    pool: &CharacterPool,
    length: TextLength,
    rng: &mut R,
) -> PracticeText {
    let chars = pool.chars();
    let drawn: Vec<char> = (0..length.get())
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    PracticeText::from_drawn(&drawn)
}

pub struct RandomGenerator {
    rng: SmallRng,
}

impl RandomGenerator {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl TextGenerator for RandomGenerator {
    fn generate(&mut self, settings: &GeneratorSettings) -> PracticeText {
        let pool = CharacterPool::build(settings.language, settings.flags);
        generate_text(&pool, settings.length, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::pool::PoolFlags;
    use crate::generator::text::{GROUP_SIZE, SEPARATOR};
    use crate::i18n::Language;

    fn settings(language: Language, length: u32, flags: PoolFlags) -> GeneratorSettings {
        GeneratorSettings {
            language,
            flags,
            length: TextLength::new(length).unwrap(),
        }
    }

    #[test]
    fn test_visible_length_for_every_valid_length() {
        let mut generator = RandomGenerator::seeded(7);
        for length in (5..=100).step_by(5) {
            let text = generator.generate(&settings(Language::En, length, PoolFlags::default()));
            let drawn = length as usize;
            assert_eq!(text.len(), drawn + (drawn - 1) / 5, "length {length}");
        }
    }

    #[test]
    fn test_separators_at_group_boundaries() {
        let mut generator = RandomGenerator::seeded(11);
        let text = generator.generate(&settings(Language::En, 30, PoolFlags::default()));
        for (i, &ch) in text.chars().iter().enumerate() {
            let is_boundary = (i + 1) % (GROUP_SIZE + 1) == 0;
            assert_eq!(ch == SEPARATOR, is_boundary, "position {i} in {text}");
        }
    }

    #[test]
    fn test_ten_chars_one_separator() {
        let mut generator = RandomGenerator::seeded(3);
        let text = generator.generate(&settings(Language::En, 10, PoolFlags::default()));
        assert_eq!(text.len(), 11);
        assert_eq!(text.get(5), Some(' '));
        let letters: Vec<char> = text.chars().iter().copied().filter(|&c| c != ' ').collect();
        assert_eq!(letters.len(), 10);
        assert!(letters.iter().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_drawn_chars_come_from_pool() {
        let flags = PoolFlags {
            upper: true,
            numbers: true,
            special: true,
        };
        let pool = CharacterPool::build(Language::Ru, flags);
        let mut generator = RandomGenerator::seeded(99);
        for _ in 0..20 {
            let text = generator.generate(&settings(Language::Ru, 100, flags));
            for (i, &ch) in text.chars().iter().enumerate() {
                if (i + 1) % (GROUP_SIZE + 1) != 0 {
                    assert!(pool.contains(ch), "{ch:?} not in pool");
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_text() {
        let s = settings(Language::En, 50, PoolFlags::default());
        let a = RandomGenerator::seeded(42).generate(&s);
        let b = RandomGenerator::seeded(42).generate(&s);
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_texts_differ() {
        let s = settings(Language::En, 30, PoolFlags::default());
        let mut generator = RandomGenerator::seeded(5);
        let a = generator.generate(&s);
        let b = generator.generate(&s);
        assert_ne!(a, b);
    }
}
