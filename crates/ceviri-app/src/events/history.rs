use ceviri_core::{Message, Notifier};

use crate::state::AppState;

pub async fn handle_clear_history(state: &AppState, notifier: &dyn Notifier) {
    let locale = state.locale().await;

    match state.history.clear() {
        Ok(()) => notifier.notify(Message::HistoryCleared.localized(locale)),
        Err(e) => {
            tracing::error!("Failed to clear history: {}", e);
            notifier.notify(Message::HistorySaveFailed.localized(locale));
        }
    }
}
