//! Heuristic language detection.
//!
//! Scripts are checked first, in a fixed priority order, then Latin text is
//! scored by counting common stop-words. This is a best-effort classifier for
//! picking a translation direction, not a general language identifier.

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Code returned for empty input and for Latin text without any stop-word hit
pub const FALLBACK_CODE: &str = "en";

const TURKISH_LETTERS: &[char] = &[
    'ğ', 'Ğ', 'ı', 'İ', 'ö', 'Ö', 'ü', 'Ü', 'ş', 'Ş', 'ç', 'Ç',
];

/// Stop-words per Latin-script language. Order is the tie-break order.
const LATIN_STOP_WORDS: &[(&str, [&str; 10])] = &[
    (
        "tr",
        ["bir", "ve", "bu", "için", "ile", "olan", "var", "değil", "da", "de"],
    ),
    (
        "en",
        ["the", "is", "and", "to", "in", "of", "a", "for", "that", "with"],
    ),
    (
        "es",
        ["el", "la", "de", "que", "y", "en", "es", "por", "un", "para"],
    ),
    (
        "fr",
        ["le", "la", "de", "et", "à", "un", "être", "pour", "dans", "ce"],
    ),
    (
        "de",
        ["der", "die", "und", "in", "den", "von", "zu", "das", "mit", "sich"],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Cyrillic,
    Arabic,
    Hangul,
    Kana,
    Han,
}

impl Script {
    /// Checked in this order, first match wins
    const PRIORITY: [Script; 5] = [
        Script::Cyrillic,
        Script::Arabic,
        Script::Hangul,
        Script::Kana,
        Script::Han,
    ];

    fn contains(self, c: char) -> bool {
        match self {
            Script::Cyrillic => ('\u{0400}'..='\u{04FF}').contains(&c),
            Script::Arabic => ('\u{0600}'..='\u{06FF}').contains(&c),
            Script::Hangul => ('\u{AC00}'..='\u{D7AF}').contains(&c),
            Script::Kana => {
                ('\u{3040}'..='\u{309F}').contains(&c) || ('\u{30A0}'..='\u{30FF}').contains(&c)
            }
            Script::Han => ('\u{4E00}'..='\u{9FFF}').contains(&c),
        }
    }

    fn language_code(self) -> &'static str {
        match self {
            Script::Cyrillic => "ru",
            Script::Arabic => "ar",
            Script::Hangul => "ko",
            Script::Kana => "ja",
            Script::Han => "zh",
        }
    }
}

/// Maps text to one of the supported language codes
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect the dominant language of `text`. Never fails.
    pub fn detect(&self, text: &str) -> &'static str {
        let text = DefaultPreprocessor.process(text);

        if text.is_empty() {
            return FALLBACK_CODE;
        }

        if let Some(script) = Script::PRIORITY
            .into_iter()
            .find(|script| text.chars().any(|c| script.contains(c)))
        {
            return script.language_code();
        }

        if text.contains(TURKISH_LETTERS) {
            return "tr";
        }

        detect_latin(&text)
    }
}

fn detect_latin(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .collect();

    let mut best = (FALLBACK_CODE, 0);
    for (code, stop_words) in LATIN_STOP_WORDS {
        let score = words.iter().filter(|w| stop_words.contains(*w)).count();
        // Strictly greater keeps the earlier language on ties
        if score > best.1 {
            best = (*code, score);
        }
    }

    best.0
}

/// Unicode-aware: accented stop-words such as `à` or `être` match, which an
/// ASCII-only `\b` boundary would never allow.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> &'static str {
        LanguageDetector::new().detect(text)
    }

    #[test]
    fn test_empty_defaults_to_english() {
        assert_eq!(detect(""), "en");
        assert_eq!(detect("   "), "en");
        assert_eq!(detect("\n\t"), "en");
    }

    #[test]
    fn test_scripts() {
        assert_eq!(detect("Привет, как дела?"), "ru");
        assert_eq!(detect("مرحبا بالعالم"), "ar");
        assert_eq!(detect("안녕하세요"), "ko");
        assert_eq!(detect("こんにちは"), "ja");
        assert_eq!(detect("カタカナ"), "ja");
        assert_eq!(detect("你好世界"), "zh");
    }

    #[test]
    fn test_kana_wins_over_han() {
        assert_eq!(detect("日本語を勉強します"), "ja");
    }

    #[test]
    fn test_half_width_katakana() {
        assert_eq!(detect("ｶﾀｶﾅ"), "ja");
    }

    #[test]
    fn test_script_priority() {
        // Cyrillic outranks everything below it
        assert_eq!(detect("да 你好 안녕"), "ru");
        assert_eq!(detect("안녕 こんにちは"), "ko");
    }

    #[test]
    fn test_turkish_letters() {
        assert_eq!(detect("Günaydın"), "tr");
        assert_eq!(detect("ÇOK GÜZEL"), "tr");
        // Turkish letters win even when English stop-words dominate
        assert_eq!(detect("the cat is on the kitchen, çok"), "tr");
    }

    #[test]
    fn test_decomposed_turkish_letter() {
        assert_eq!(detect("s\u{0327}eker"), "tr");
    }

    #[test]
    fn test_english_stop_words() {
        assert_eq!(detect("The quick fox is here"), "en");
    }

    #[test]
    fn test_spanish_stop_words() {
        assert_eq!(detect("El perro es grande y el gato"), "es");
    }

    #[test]
    fn test_french_and_german() {
        assert_eq!(detect("le chat dort dans la maison"), "fr");
        assert_eq!(detect("à la maison"), "fr");
        assert_eq!(detect("Der Hund und die Katze"), "de");
    }

    #[test]
    fn test_turkish_without_special_letters() {
        assert_eq!(detect("bu bir kalem ve bir defter"), "tr");
    }

    #[test]
    fn test_whole_words_only() {
        // "there", "island", "another" contain stop-words but are not stop-words
        assert_eq!(detect("xyz there island another"), "en");
        assert_eq!(detect("Dieser Indianer"), "en");
    }

    #[test]
    fn test_no_stop_words_defaults_to_english() {
        assert_eq!(detect("Hola amigo"), "en");
        assert_eq!(detect("12345"), "en");
    }

    #[test]
    fn test_tie_break_order() {
        // "de" counts for tr, es and fr
        assert_eq!(detect("de"), "tr");
        // "la" counts for es and fr
        assert_eq!(detect("la"), "es");
        // "in" counts for en and de
        assert_eq!(detect("in"), "en");
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(detect("(der) die, und!"), "de");
    }

    #[test]
    fn test_accented_stop_words_count() {
        // `la` alone would tie es and fr; `à` tips it to fr
        assert_eq!(detect("à la maison"), "fr");
    }

    #[test]
    fn test_detection_is_deterministic() {
        let detector = LanguageDetector::new();
        let text = "El perro es grande y el gato";
        assert_eq!(detector.detect(text), detector.detect(text));
    }
}
