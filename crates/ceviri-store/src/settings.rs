use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ceviri_core::{Language, LanguagePair};
use serde::{Deserialize, Serialize};

use crate::store::{JsonStore, StoreError};

const LANGUAGE1_KEY: &str = "language1";
const LANGUAGE2_KEY: &str = "language2";
const THEME_KEY: &str = "theme";
const TEXT_SIZE_KEY: &str = "textSize";
const AUTO_COPY_KEY: &str = "autoCopy";

pub const DEFAULT_TEXT_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Snapshot of every persisted setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub language1: Language,
    pub language2: Language,
    pub theme: Theme,
    pub text_size: u32,
    pub auto_copy: bool,
}

/// Typed accessors over the settings keys of a [`JsonStore`]
#[derive(Clone)]
pub struct SettingsManager {
    store: Arc<JsonStore>,
}

impl SettingsManager {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub fn language1(&self) -> Language {
        self.store.get(LANGUAGE1_KEY, Language::english())
    }

    pub fn language2(&self) -> Language {
        self.store.get(LANGUAGE2_KEY, Language::turkish())
    }

    pub fn set_language1(&self, language: &Language) -> Result<(), StoreError> {
        self.store.set(LANGUAGE1_KEY, language)
    }

    pub fn set_language2(&self, language: &Language) -> Result<(), StoreError> {
        self.store.set(LANGUAGE2_KEY, language)
    }

    /// Current pair, read fresh on every call
    pub fn language_pair(&self) -> LanguagePair {
        LanguagePair::new(self.language1(), self.language2())
    }

    pub fn swap_languages(&self) -> Result<LanguagePair, StoreError> {
        let swapped = self.language_pair().swapped();
        self.set_language1(&swapped.lang1)?;
        self.set_language2(&swapped.lang2)?;
        Ok(swapped)
    }

    pub fn theme(&self) -> Theme {
        self.store.get(THEME_KEY, Theme::default())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, &theme)
    }

    pub fn text_size(&self) -> u32 {
        self.store.get(TEXT_SIZE_KEY, DEFAULT_TEXT_SIZE)
    }

    pub fn set_text_size(&self, size: u32) -> Result<(), StoreError> {
        self.store.set(TEXT_SIZE_KEY, &size)
    }

    pub fn auto_copy(&self) -> bool {
        self.store.get(AUTO_COPY_KEY, false)
    }

    pub fn set_auto_copy(&self, enabled: bool) -> Result<(), StoreError> {
        self.store.set(AUTO_COPY_KEY, &enabled)
    }

    pub fn snapshot(&self) -> Settings {
        Settings {
            language1: self.language1(),
            language2: self.language2(),
            theme: self.theme(),
            text_size: self.text_size(),
            auto_copy: self.auto_copy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SettingsManager {
        SettingsManager::new(Arc::new(JsonStore::in_memory()))
    }

    #[test]
    fn test_defaults() {
        let settings = manager().snapshot();

        assert_eq!(settings.language1.code, "en");
        assert_eq!(settings.language2.code, "tr");
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.text_size, 16);
        assert!(!settings.auto_copy);
    }

    #[test]
    fn test_swap_languages() {
        let manager = manager();
        let swapped = manager.swap_languages().unwrap();

        assert_eq!(swapped.lang1.code, "tr");
        assert_eq!(manager.language1().code, "tr");
        assert_eq!(manager.language2().code, "en");
    }

    #[test]
    fn test_setters_persist() {
        let manager = manager();
        let german = Language::from_code("de").unwrap();

        manager.set_language2(&german).unwrap();
        manager.set_theme(Theme::System).unwrap();
        manager.set_text_size(20).unwrap();
        manager.set_auto_copy(true).unwrap();

        let settings = manager.snapshot();
        assert_eq!(settings.language2, german);
        assert_eq!(settings.theme, Theme::System);
        assert_eq!(settings.text_size, 20);
        assert!(settings.auto_copy);
    }

    #[test]
    fn test_languages_stored_as_objects() {
        let store = Arc::new(JsonStore::in_memory());
        let manager = SettingsManager::new(store.clone());
        manager.set_language1(&Language::from_code("ja").unwrap()).unwrap();

        let raw: serde_json::Value = store.get(LANGUAGE1_KEY, serde_json::Value::Null);
        assert_eq!(raw["code"], "ja");
        assert_eq!(raw["name"], "日本語");
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::System.to_string(), "system");
    }
}
