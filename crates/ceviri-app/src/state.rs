use std::sync::{Arc, OnceLock};
use std::time::Duration;

use ceviri_config::Config;
use ceviri_core::{LanguageDetector, Locale};
use ceviri_store::{HistoryManager, JsonStore, SettingsManager};
use ceviri_translator::{LibreTranslate, MyMemory, TranslationService, Translator};
use tokio::sync::RwLock;

use crate::clipboard::ClipboardWriter;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub settings: SettingsManager,
    pub history: HistoryManager,
    pub service: TranslationService,
    clipboard: OnceLock<ClipboardWriter>,
}

impl AppState {
    /// Open the store and wire both providers from the config
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = Arc::new(JsonStore::open(config.storage.storage_file())?);
        let service = build_service(&config)?;
        Ok(Self::with_parts(config, store, service))
    }

    pub fn with_parts(config: Config, store: Arc<JsonStore>, service: TranslationService) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            settings: SettingsManager::new(store.clone()),
            history: HistoryManager::new(store),
            service,
            clipboard: OnceLock::new(),
        }
    }

    pub async fn locale(&self) -> Locale {
        self.config.read().await.ui.locale
    }

    /// Clipboard thread is only started on first copy
    pub fn clipboard(&self) -> &ClipboardWriter {
        self.clipboard.get_or_init(ClipboardWriter::spawn)
    }
}

/// Primary LibreTranslate, then MyMemory, sharing one HTTP client
fn build_service(config: &Config) -> anyhow::Result<TranslationService> {
    let mut builder = reqwest::Client::builder();
    // 0 disables the timeout
    if config.timeout_seconds > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
    }
    let client = builder.build()?;

    let primary = LibreTranslate::new(config.translator.libretranslate_url.clone())
        .with_client(client.clone())
        .with_api_key(config.translator.libretranslate_api_key.clone());
    let secondary = MyMemory::new(config.translator.mymemory_url.clone())
        .with_client(client)
        .with_email(config.translator.mymemory_email.clone());

    let providers: Vec<Arc<dyn Translator>> = vec![Arc::new(primary), Arc::new(secondary)];
    tracing::debug!(
        "Providers: {}",
        providers
            .iter()
            .map(|p| p.metadata().name)
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    Ok(TranslationService::new(LanguageDetector::new(), providers))
}
