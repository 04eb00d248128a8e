use ceviri_core::{Language, LanguagePair, Message, Notifier};

use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
pub enum Slot {
    First,
    Second,
}

pub async fn handle_swap(state: &AppState, notifier: &dyn Notifier) -> Option<LanguagePair> {
    let locale = state.locale().await;

    match state.settings.swap_languages() {
        Ok(pair) => {
            notifier.notify(Message::LanguagesSwapped.localized(locale));
            Some(pair)
        }
        Err(e) => {
            tracing::error!("Failed to swap languages: {}", e);
            notifier.notify(Message::SettingsSaveFailed.localized(locale));
            None
        }
    }
}

pub async fn handle_set_language(
    state: &AppState,
    slot: Slot,
    code: &str,
    notifier: &dyn Notifier,
) -> Option<LanguagePair> {
    let locale = state.locale().await;

    let Some(language) = Language::from_code(code) else {
        tracing::warn!("Unknown language code: {}", code);
        notifier.notify(Message::UnknownLanguage.localized(locale));
        return None;
    };

    let result = match slot {
        Slot::First => state.settings.set_language1(&language),
        Slot::Second => state.settings.set_language2(&language),
    };

    match result {
        Ok(()) => Some(state.settings.language_pair()),
        Err(e) => {
            tracing::error!("Failed to save language: {}", e);
            notifier.notify(Message::SettingsSaveFailed.localized(locale));
            None
        }
    }
}

pub async fn handle_set_auto_copy(state: &AppState, enabled: bool, notifier: &dyn Notifier) {
    let locale = state.locale().await;

    match state.settings.set_auto_copy(enabled) {
        Ok(()) => {
            let message = if enabled {
                Message::AutoCopyOn
            } else {
                Message::AutoCopyOff
            };
            notifier.notify(message.localized(locale));
        }
        Err(e) => {
            tracing::error!("Failed to save auto copy: {}", e);
            notifier.notify(Message::SettingsSaveFailed.localized(locale));
        }
    }
}
