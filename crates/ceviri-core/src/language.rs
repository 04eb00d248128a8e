use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A language the client can translate between
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639-1 code ("en", "tr", ...)
    pub code: Cow<'static, str>,
    /// Display name in the language itself
    pub name: Cow<'static, str>,
    /// Flag glyph shown next to the name
    pub flag: Cow<'static, str>,
}

impl Language {
    pub const fn new(code: &'static str, name: &'static str, flag: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            name: Cow::Borrowed(name),
            flag: Cow::Borrowed(flag),
        }
    }

    /// Look up a supported language by code, ignoring case
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        SUPPORTED_LANGUAGES
            .iter()
            .find(|lang| lang.code.eq_ignore_ascii_case(code))
            .cloned()
    }

    pub fn english() -> Language {
        SUPPORTED_LANGUAGES[0].clone()
    }

    pub fn turkish() -> Language {
        SUPPORTED_LANGUAGES[1].clone()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.name)
    }
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language::new("en", "English", "🇬🇧"),
    Language::new("tr", "Türkçe", "🇹🇷"),
    Language::new("es", "Español", "🇪🇸"),
    Language::new("fr", "Français", "🇫🇷"),
    Language::new("de", "Deutsch", "🇩🇪"),
    Language::new("it", "Italiano", "🇮🇹"),
    Language::new("pt", "Português", "🇵🇹"),
    Language::new("ru", "Русский", "🇷🇺"),
    Language::new("ar", "العربية", "🇸🇦"),
    Language::new("ja", "日本語", "🇯🇵"),
    Language::new("ko", "한국어", "🇰🇷"),
    Language::new("zh", "中文", "🇨🇳"),
];

/// The two configured languages. Position only matters as the default direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub lang1: Language,
    pub lang2: Language,
}

impl LanguagePair {
    pub fn new(lang1: Language, lang2: Language) -> Self {
        Self { lang1, lang2 }
    }

    pub fn swapped(&self) -> Self {
        Self {
            lang1: self.lang2.clone(),
            lang2: self.lang1.clone(),
        }
    }

    pub fn is_same_language(&self) -> bool {
        self.lang1.code == self.lang2.code
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(Language::english(), Language::turkish())
    }
}
