use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::{Language, LanguagePair};

/// One successful translation, as stored in history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: String,
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: Language,
    pub target_lang: Language,
    /// ISO-8601, UTC, millisecond precision
    pub timestamp: String,
}

impl TranslationRecord {
    /// Build a record stamped with a fresh id and the current time
    pub fn new(
        source_text: impl Into<String>,
        translated_text: impl Into<String>,
        source_lang: Language,
        target_lang: Language,
    ) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            source_lang,
            target_lang,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Text typed by the user
    TextInput(String),
    UiEvent(UiEvent),
    ShowTranslation(TranslationRecord),
    ShowHistory(Vec<TranslationRecord>),
    ShowLanguages(LanguagePair),
    /// Short user-facing message, the terminal counterpart of a toast
    Notify(String),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    SwapLanguages,
    SetLanguage1(String),
    SetLanguage2(String),
    SetAutoCopy(bool),
    ListHistory,
    ClearHistory,
    /// Sent by the UI to stop, echoed back once pending events are handled
    Close,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_uses_camel_case() {
        let record = TranslationRecord::new(
            "Hello",
            "Merhaba",
            Language::english(),
            Language::turkish(),
        );
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["sourceText"], "Hello");
        assert_eq!(json["translatedText"], "Merhaba");
        assert_eq!(json["sourceLang"]["code"], "en");
        assert_eq!(json["targetLang"]["flag"], "🇹🇷");
        assert!(json.get("source_text").is_none());
    }

    #[test]
    fn test_record_timestamp_is_iso_8601() {
        let record = TranslationRecord::new("a", "b", Language::english(), Language::turkish());
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
        assert!(record.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_record_ids_are_unique() {
        let a = TranslationRecord::new("a", "b", Language::english(), Language::turkish());
        let b = TranslationRecord::new("a", "b", Language::english(), Language::turkish());
        assert_ne!(a.id, b.id);
    }
}
