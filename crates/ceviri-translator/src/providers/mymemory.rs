use async_trait::async_trait;
use serde::Deserialize;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

pub const DEFAULT_MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";

/// MyMemory REST endpoint, the fallback provider
#[derive(Clone)]
pub struct MyMemory {
    client: reqwest::Client,
    api_url: String,
    /// Contact address, raises the anonymous daily quota
    email: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: Option<ResponseData>,
    /// Number or string depending on the error path
    #[serde(default)]
    response_status: Option<serde_json::Value>,
    #[serde(default)]
    response_details: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: Option<String>,
}

impl MyMemory {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            email: None,
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email.filter(|e| !e.is_empty());
        self
    }
}

impl Default for MyMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MYMEMORY_URL)
    }
}

/// `responseStatus` other than 200 means the body carries an error, not a translation
fn status_code(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[async_trait]
impl Translator for MyMemory {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        let langpair = format!("{from}|{to}");
        let mut query = vec![("q", text), ("langpair", langpair.as_str())];
        if let Some(email) = &self.email {
            query.push(("de", email.as_str()));
        }

        let response = self.client.get(&self.api_url).query(&query).send().await?;

        if !response.status().is_success() {
            return Err(TranslateError::from_status(response.status()));
        }

        let parsed: MyMemoryResponse = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        if let Some(status) = parsed.response_status.as_ref().and_then(status_code)
            && status != 200
        {
            return Err(TranslateError::ApiError(format!(
                "MyMemory status {}: {}",
                status,
                parsed.response_details.unwrap_or_default()
            )));
        }

        Ok(Translation {
            text: parsed.response_data.and_then(|data| data.translated_text),
            from: from.to_string(),
            to: to.to_string(),
            provider: "mymemory".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
