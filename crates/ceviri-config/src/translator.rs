use serde::{Deserialize, Serialize};

use crate::Lookup;

fn default_libretranslate_url() -> String {
    "https://libretranslate.com/translate".to_string()
}

fn default_mymemory_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Primary provider endpoint
    #[serde(default = "default_libretranslate_url")]
    pub libretranslate_url: String,
    #[serde(default)]
    pub libretranslate_api_key: Option<String>,
    /// Fallback provider endpoint
    #[serde(default = "default_mymemory_url")]
    pub mymemory_url: String,
    #[serde(default)]
    pub mymemory_email: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            libretranslate_url: default_libretranslate_url(),
            libretranslate_api_key: None,
            mymemory_url: default_mymemory_url(),
            mymemory_email: None,
        }
    }
}

impl TranslatorConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            libretranslate_url: non_empty("LIBRETRANSLATE_URL")
                .unwrap_or_else(default_libretranslate_url),
            libretranslate_api_key: non_empty("LIBRETRANSLATE_API_KEY"),
            mymemory_url: non_empty("MYMEMORY_URL").unwrap_or_else(default_mymemory_url),
            mymemory_email: non_empty("MYMEMORY_EMAIL"),
        }
    }
}
