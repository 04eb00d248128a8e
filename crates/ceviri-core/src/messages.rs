use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of the short messages shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "tr" | "turkish" | "türkçe" => Ok(Locale::Tr),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    EmptyInput,
    TranslationUnavailable,
    CopyFailed,
    TranslationCopied,
    LanguagesSwapped,
    HistoryCleared,
    HistoryEmpty,
    AutoCopyOn,
    AutoCopyOff,
    UnknownLanguage,
    SettingsSaveFailed,
    HistorySaveFailed,
}

impl Message {
    pub fn localized(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.english(),
            Locale::Tr => self.turkish(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Message::EmptyInput => "Please enter some text to translate",
            Message::TranslationUnavailable => {
                "Translation failed. Check your internet connection."
            }
            Message::CopyFailed => "Copy failed",
            Message::TranslationCopied => "Translation copied!",
            Message::LanguagesSwapped => "Languages swapped",
            Message::HistoryCleared => "History cleared",
            Message::HistoryEmpty => "No translations yet",
            Message::AutoCopyOn => "Auto copy on",
            Message::AutoCopyOff => "Auto copy off",
            Message::UnknownLanguage => "Unsupported language code",
            Message::SettingsSaveFailed => "Could not save settings",
            Message::HistorySaveFailed => "Could not save history",
        }
    }

    fn turkish(self) -> &'static str {
        match self {
            Message::EmptyInput => "Lütfen çevirmek için bir metin girin",
            Message::TranslationUnavailable => {
                "Çeviri başarısız. İnternet bağlantınızı kontrol edin."
            }
            Message::CopyFailed => "Kopyalama başarısız",
            Message::TranslationCopied => "Çeviri kopyalandı!",
            Message::LanguagesSwapped => "Diller değiştirildi",
            Message::HistoryCleared => "Geçmiş temizlendi",
            Message::HistoryEmpty => "Henüz çeviri yok",
            Message::AutoCopyOn => "Otomatik kopyalama açık",
            Message::AutoCopyOff => "Otomatik kopyalama kapalı",
            Message::UnknownLanguage => "Desteklenmeyen dil kodu",
            Message::SettingsSaveFailed => "Ayarlar kaydedilemedi",
            Message::HistorySaveFailed => "Geçmiş kaydedilemedi",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("TR".parse::<Locale>(), Ok(Locale::Tr));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert!("xx".parse::<Locale>().is_err());
    }

    #[test]
    fn test_messages_differ_per_locale() {
        let en = Message::TranslationUnavailable.localized(Locale::En);
        let tr = Message::TranslationUnavailable.localized(Locale::Tr);
        assert_ne!(en, tr);
        assert!(tr.contains("İnternet"));
    }
}
