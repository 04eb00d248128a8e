use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Prepare text for classification. Never used on text sent to a provider.
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC): composes decomposed accents and folds
        // half-width kana into the regular blocks
        text.nfkc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
