use ceviri_core::{Message, Notifier, TranslationRecord};

use crate::state::AppState;

/// Translate `text` with the configured pair and store the result in history.
///
/// Failures are reported through `notifier` and yield `None`.
pub async fn handle_text_input(
    state: &AppState,
    text: &str,
    notifier: &dyn Notifier,
) -> Option<TranslationRecord> {
    let locale = state.locale().await;
    let pair = state.settings.language_pair();
    tracing::debug!("TextInput received: {} chars", text.len());

    let record = match state.service.translate(text, &pair).await {
        Ok(record) => record,
        Err(e) => {
            tracing::error!("Translation error: {}", e);
            notifier.notify(e.user_message(locale));
            return None;
        }
    };

    if let Err(e) = state.history.append(record.clone()) {
        tracing::error!("Failed to save translation to history: {}", e);
        notifier.notify(Message::HistorySaveFailed.localized(locale));
    }

    Some(record)
}

/// Copy the translation when auto-copy is enabled
pub async fn auto_copy(state: &AppState, record: &TranslationRecord, notifier: &dyn Notifier) {
    if !state.settings.auto_copy() {
        return;
    }

    let locale = state.locale().await;
    match state.clipboard().copy(record.translated_text.clone()).await {
        Ok(()) => notifier.notify(Message::TranslationCopied.localized(locale)),
        Err(e) => {
            tracing::warn!("Auto copy failed: {}", e);
            notifier.notify(Message::CopyFailed.localized(locale));
        }
    }
}
