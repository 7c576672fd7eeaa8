use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::generator::GeneratorSettings;
use crate::generator::pool::PoolFlags;
use crate::generator::text::{DEFAULT_LENGTH, TextLength};
use crate::i18n::Language;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_length")]
    pub length: u32,
    #[serde(default)]
    pub include_upper_case: bool,
    #[serde(default)]
    pub include_numbers: bool,
    #[serde(default)]
    pub include_special_chars: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_length() -> u32 {
    DEFAULT_LENGTH
}
fn default_theme() -> String {
    "default".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            length: default_length(),
            include_upper_case: false,
            include_numbers: false,
            include_special_chars: false,
            theme: default_theme(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keytrainer")
            .join("config.toml")
    }

    /// Snap `length` onto the 5..=100 grid. Hand-edited files may hold anything.
    pub fn normalize(&mut self) {
        self.length = self.text_length().get();
    }

    pub fn text_length(&self) -> TextLength {
        TextLength::nearest(self.length)
    }

    pub fn pool_flags(&self) -> PoolFlags {
        PoolFlags {
            upper: self.include_upper_case,
            numbers: self.include_numbers,
            special: self.include_special_chars,
        }
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            language: self.language,
            flags: self.pool_flags(),
            length: self.text_length(),
        }
    }
}
