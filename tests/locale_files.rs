use std::collections::BTreeMap;
use std::fs;

const REQUIRED_KEYS: &[&str] = &[
    "title",
    "start",
    "restart",
    "speed",
    "congrats",
    "letterCount",
    "upperCase",
    "numbers",
    "specialChars",
];

fn load(locale: &str) -> BTreeMap<String, String> {
    let path = format!("{}/locales/{locale}.yml", env!("CARGO_MANIFEST_DIR"));
    let content = fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
    serde_yaml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {path}: {e}"))
}

#[test]
fn every_locale_has_every_key() {
    for locale in ["en", "ru"] {
        let strings = load(locale);
        for key in REQUIRED_KEYS {
            assert!(strings.contains_key(*key), "{locale} is missing {key}");
        }
        assert_eq!(strings.len(), REQUIRED_KEYS.len(), "{locale} has extra keys");
    }
}

#[test]
fn speed_template_has_one_separator_and_both_placeholders() {
    for locale in ["en", "ru"] {
        let speed = &load(locale)["speed"];
        assert_eq!(speed.matches('|').count(), 1, "{locale}: {speed}");
        let (left, right) = speed.split_once('|').unwrap();
        assert!(left.contains("%{speed}"), "{locale}: {speed}");
        assert!(right.contains("%{accuracy}"), "{locale}: {speed}");
    }
}
