use crate::i18n::Language;

pub const LOWERCASE_EN: &str = "abcdefghijklmnopqrstuvwxyz";
pub const LOWERCASE_RU: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=,./<>?;':\"[]{}\\|";

/// Optional character classes appended after the base letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolFlags {
    pub upper: bool,
    pub numbers: bool,
    pub special: bool,
}

/// Characters eligible for random practice text.
///
/// Built as a concatenation in a fixed order: base lowercase letters, their
/// uppercase forms, digits, symbols. The base letters are always present, so
/// a pool is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn build(language: Language, flags: PoolFlags) -> Self {
        let base = base_lowercase(language);
        let mut chars: Vec<char> = base.chars().collect();

        if flags.upper {
            // Uppercase the base set only, never what was appended after it.
            chars.extend(base.chars().flat_map(char::to_uppercase));
        }
        if flags.numbers {
            chars.extend(DIGITS.chars());
        }
        if flags.special {
            chars.extend(SPECIAL_CHARS.chars());
        }

        Self { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }
}

pub fn base_lowercase(language: Language) -> &'static str {
    match language {
        Language::En => LOWERCASE_EN,
        Language::Ru => LOWERCASE_RU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_pool_is_lowercase_only() {
        let pool = CharacterPool::build(Language::En, PoolFlags::default());
        assert_eq!(pool.len(), 26);
        assert!(pool.chars().iter().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_russian_pool_includes_yo() {
        let pool = CharacterPool::build(Language::Ru, PoolFlags::default());
        assert_eq!(pool.len(), 33);
        assert!(pool.contains('ё'));
        assert!(!pool.contains('a'));
    }

    #[test]
    fn test_concatenation_order() {
        let flags = PoolFlags {
            upper: true,
            numbers: true,
            special: true,
        };
        let pool = CharacterPool::build(Language::En, flags);
        let chars = pool.chars();
        assert_eq!(chars[0], 'a');
        assert_eq!(chars[26], 'A');
        assert_eq!(chars[52], '0');
        assert_eq!(chars[62], '!');
        assert_eq!(pool.len(), 26 * 2 + 10 + SPECIAL_CHARS.chars().count());
    }

    #[test]
    fn test_upper_applies_to_base_only() {
        // Symbols have no case, digits neither; uppercasing must not duplicate them.
        let flags = PoolFlags {
            upper: true,
            numbers: true,
            special: false,
        };
        let pool = CharacterPool::build(Language::En, flags);
        let zeros = pool.chars().iter().filter(|&&c| c == '0').count();
        assert_eq!(zeros, 1);
    }

    #[test]
    fn test_russian_upper_maps_yo() {
        let flags = PoolFlags {
            upper: true,
            ..PoolFlags::default()
        };
        let pool = CharacterPool::build(Language::Ru, flags);
        assert_eq!(pool.len(), 66);
        assert!(pool.contains('Ё'));
        assert!(pool.contains('Я'));
    }

    #[test]
    fn test_symbol_set_has_no_duplicates() {
        let mut seen: Vec<char> = SPECIAL_CHARS.chars().collect();
        let before = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), before);
    }
}
