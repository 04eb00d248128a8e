//! Translation orchestration: direction resolution and provider fallback.

use std::fmt;
use std::sync::Arc;

use ceviri_core::{Language, LanguageDetector, LanguagePair, Locale, Message, TranslationRecord};

use crate::{TranslateError, Translator};

/// A single provider's failure, kept for logs
#[derive(Debug)]
pub struct ProviderFailure {
    pub provider: String,
    pub error: TranslateError,
}

impl fmt::Display for ProviderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.provider, self.error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Nothing to translate")]
    EmptyInput,

    #[error("All translation providers failed: [{}]", format_failures(.failures))]
    Unavailable { failures: Vec<ProviderFailure> },
}

fn format_failures(failures: &[ProviderFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ServiceError {
    /// Short message for the notifier, never the raw provider errors
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            ServiceError::EmptyInput => Message::EmptyInput.localized(locale),
            ServiceError::Unavailable { .. } => Message::TranslationUnavailable.localized(locale),
        }
    }
}

/// Decide translation direction from the detected code.
///
/// Input in `lang2` flips the pair; anything else (including `lang1` itself)
/// translates `lang1` into `lang2`.
pub fn resolve_direction(detected: &str, pair: &LanguagePair) -> (Language, Language) {
    if detected == pair.lang1.code {
        (pair.lang1.clone(), pair.lang2.clone())
    } else if detected == pair.lang2.code {
        (pair.lang2.clone(), pair.lang1.clone())
    } else {
        (pair.lang1.clone(), pair.lang2.clone())
    }
}

/// Detects the input language and runs providers in order until one succeeds
pub struct TranslationService {
    detector: LanguageDetector,
    providers: Vec<Arc<dyn Translator>>,
}

impl TranslationService {
    pub fn new(detector: LanguageDetector, providers: Vec<Arc<dyn Translator>>) -> Self {
        Self {
            detector,
            providers,
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        pair: &LanguagePair,
    ) -> Result<TranslationRecord, ServiceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::EmptyInput);
        }

        if pair.is_same_language() {
            tracing::warn!(
                "Same-language pair '{}', returning input unchanged",
                pair.lang1.code
            );
            return Ok(TranslationRecord::new(
                text,
                text,
                pair.lang1.clone(),
                pair.lang2.clone(),
            ));
        }

        let detected = self.detector.detect(trimmed);
        let (source, target) = resolve_direction(detected, pair);
        tracing::debug!(
            "Detected '{}', translating {} -> {}",
            detected,
            source.code,
            target.code
        );

        let translated = self.run_providers(text, &source.code, &target.code).await?;

        Ok(TranslationRecord::new(text, translated, source, target))
    }

    /// Single pass over the providers, no retries
    async fn run_providers(&self, text: &str, from: &str, to: &str) -> Result<String, ServiceError> {
        let mut failures = Vec::new();

        for provider in &self.providers {
            let name = provider.metadata().name;

            match provider.translate(text, from, to).await {
                Ok(translation) => {
                    tracing::info!("Translated via {}", name);
                    let translated = translation
                        .text
                        .filter(|t| !t.is_empty())
                        .unwrap_or_else(|| text.to_string());
                    return Ok(translated);
                }
                Err(error) => {
                    tracing::warn!("{} failed: {}", name, error);
                    failures.push(ProviderFailure {
                        provider: name,
                        error,
                    });
                }
            }
        }

        tracing::error!("No provider could translate the input");
        Err(ServiceError::Unavailable { failures })
    }
}
