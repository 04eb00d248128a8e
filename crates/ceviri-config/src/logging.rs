use serde::{Deserialize, Serialize};

use crate::Lookup;

fn default_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let level = lookup("LOG_LEVEL").unwrap_or_else(default_level);
        let json = lookup("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self { level, json }
    }
}
