mod history;
mod settings;
mod store;

pub use history::{HistoryManager, MAX_HISTORY};
pub use settings::{DEFAULT_TEXT_SIZE, Settings, SettingsManager, Theme};
pub use store::{JsonStore, StoreError};
