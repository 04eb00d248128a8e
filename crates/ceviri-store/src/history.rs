use std::sync::Arc;

use ceviri_core::TranslationRecord;

use crate::store::{JsonStore, StoreError};

const HISTORY_KEY: &str = "translations";

/// Oldest entries are dropped beyond this
pub const MAX_HISTORY: usize = 100;

/// Translation history, most recent first
#[derive(Clone)]
pub struct HistoryManager {
    store: Arc<JsonStore>,
}

impl HistoryManager {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<TranslationRecord> {
        self.store.get(HISTORY_KEY, Vec::new())
    }

    pub fn append(&self, record: TranslationRecord) -> Result<(), StoreError> {
        self.store
            .update(HISTORY_KEY, Vec::new(), |history: &mut Vec<TranslationRecord>| {
                history.insert(0, record);
                history.truncate(MAX_HISTORY);
            })
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.set(HISTORY_KEY, &Vec::<TranslationRecord>::new())
    }
}
