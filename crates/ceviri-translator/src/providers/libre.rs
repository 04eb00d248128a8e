use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

pub const DEFAULT_LIBRETRANSLATE_URL: &str = "https://libretranslate.com/translate";

/// LibreTranslate REST endpoint, the primary provider
#[derive(Clone)]
pub struct LibreTranslate {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl LibreTranslate {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: None,
        }
    }

    /// Share a preconfigured client (timeouts, proxies)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.is_empty());
        self
    }
}

impl Default for LibreTranslate {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRETRANSLATE_URL)
    }
}

#[async_trait]
impl Translator for LibreTranslate {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        let body = LibreTranslateRequest {
            q: text,
            source: from,
            target: to,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self.client.post(&self.api_url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(TranslateError::from_status(response.status()));
        }

        let parsed: LibreTranslateResponse = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Ok(Translation {
            text: parsed.translated_text,
            from: from.to_string(),
            to: to.to_string(),
            provider: "libretranslate".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
