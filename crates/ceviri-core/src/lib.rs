pub mod detect;
pub mod language;
pub mod messages;
pub mod notify;
pub mod preprocess;
pub mod types;

pub use detect::LanguageDetector;
pub use language::{Language, LanguagePair, SUPPORTED_LANGUAGES};
pub use messages::{Locale, Message};
pub use notify::Notifier;
pub use types::TranslationRecord;
