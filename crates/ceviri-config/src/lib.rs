use std::env;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::storage::StorageConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod logging;
pub mod storage;
pub mod translator;
pub mod ui;

/// Source of configuration values, normally the process environment
pub(crate) type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,

    /// HTTP request timeout for provider calls
    pub timeout_seconds: u64,
}

impl Config {
    /// Read configuration from the environment. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn new() -> Self {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let timeout_seconds = lookup("TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            translator: TranslatorConfig::from_lookup(lookup),
            storage: StorageConfig::from_lookup(lookup),
            ui: UiConfig::from_lookup(lookup),
            logging: LoggingConfig::from_lookup(lookup),

            timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(&|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use ceviri_core::Locale;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(&|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(
            config.translator.libretranslate_url,
            "https://libretranslate.com/translate"
        );
        assert_eq!(
            config.translator.mymemory_url,
            "https://api.mymemory.translated.net/get"
        );
        assert!(config.translator.libretranslate_api_key.is_none());
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.ui.locale, Locale::En);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert!(config.storage.storage_file().ends_with("storage.json"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("LIBRETRANSLATE_URL", "http://localhost:5000/translate"),
            ("LIBRETRANSLATE_API_KEY", "key"),
            ("MYMEMORY_EMAIL", "me@example.com"),
            ("TIMEOUT_SECONDS", "5"),
            ("CEVIRI_DATA_DIR", "/tmp/ceviri-test"),
            ("CEVIRI_LOCALE", "tr"),
            ("LOG_FORMAT", "JSON"),
        ]);

        assert_eq!(
            config.translator.libretranslate_url,
            "http://localhost:5000/translate"
        );
        assert_eq!(config.translator.libretranslate_api_key.as_deref(), Some("key"));
        assert_eq!(
            config.translator.mymemory_email.as_deref(),
            Some("me@example.com")
        );
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(
            config.storage.storage_file(),
            PathBuf::from("/tmp/ceviri-test/storage.json")
        );
        assert_eq!(config.ui.locale, Locale::Tr);
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("TIMEOUT_SECONDS", "soon"),
            ("CEVIRI_LOCALE", "klingon"),
            ("LIBRETRANSLATE_API_KEY", "  "),
        ]);

        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.ui.locale, Locale::En);
        assert!(config.translator.libretranslate_api_key.is_none());
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["ui"]["locale"], "en");
        assert_eq!(json["timeout_seconds"], 30);
    }
}
