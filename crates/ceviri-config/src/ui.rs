use ceviri_core::Locale;
use serde::{Deserialize, Serialize};

use crate::Lookup;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Language of notifications and prompts
    pub locale: Locale,
}

impl UiConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let locale = lookup("CEVIRI_LOCALE")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self { locale }
    }
}
