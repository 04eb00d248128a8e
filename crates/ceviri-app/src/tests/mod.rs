use std::sync::Arc;

use async_trait::async_trait;
use ceviri_config::Config;
use ceviri_core::LanguageDetector;
use ceviri_store::JsonStore;
use ceviri_translator::{
    ProviderMetadata, TranslateError, Translation, TranslationService, Translator,
};

use crate::state::AppState;

mod channel_tests;
mod input_tests;

/// Uppercases the input, or fails every call
struct UppercaseTranslator {
    fail: bool,
}

#[async_trait]
impl Translator for UppercaseTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        if self.fail {
            return Err(TranslateError::ApiError("HTTP 503".to_string()));
        }
        Ok(Translation {
            text: Some(text.to_uppercase()),
            from: from.to_string(),
            to: to.to_string(),
            provider: "Uppercase".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Uppercase".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// App state over an in-memory store and a single fake provider
fn test_state(fail: bool) -> Arc<AppState> {
    let providers: Vec<Arc<dyn Translator>> = vec![Arc::new(UppercaseTranslator { fail })];
    let service = TranslationService::new(LanguageDetector::new(), providers);
    Arc::new(AppState::with_parts(
        Config::default(),
        Arc::new(JsonStore::in_memory()),
        service,
    ))
}
