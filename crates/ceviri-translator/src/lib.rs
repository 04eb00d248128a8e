pub mod providers;
pub mod service;

pub use providers::{LibreTranslate, MyMemory};
pub use service::{ProviderFailure, ServiceError, TranslationService};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    /// `None` when the provider answered without a translation
    pub text: Option<String>,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

impl TranslateError {
    /// Map a non-success HTTP status to the matching error
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            429 => TranslateError::RateLimitExceeded,
            401 | 403 => TranslateError::AuthenticationError,
            _ => TranslateError::ApiError(format!("HTTP {status}")),
        }
    }
}
