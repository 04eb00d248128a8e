use std::sync::Arc;

use ceviri_core::types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};

use crate::notify::ChannelNotifier;
use crate::state::AppState;

pub mod history;
pub mod settings;
pub mod text_input;

use history::handle_clear_history;
use settings::{Slot, handle_set_auto_copy, handle_set_language, handle_swap};
use text_input::{auto_copy, handle_text_input};

/// App's main loop. One event at a time, so translations never overlap.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let notifier = ChannelNotifier::new(app_to_ui_tx.clone());

    app_to_ui_tx
        .send(AppEvent::ShowLanguages(state.settings.language_pair()))
        .await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        if !handle_events(&state, &notifier, &app_to_ui_tx, event).await? {
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Closed");
    Ok(())
}

/// Returns `false` once the UI asked to close
async fn handle_events(
    state: &AppState,
    notifier: &ChannelNotifier,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::TextInput(text) => {
            if let Some(record) = handle_text_input(state, &text, notifier).await {
                app_to_ui_tx
                    .send(AppEvent::ShowTranslation(record.clone()))
                    .await?;
                auto_copy(state, &record, notifier).await;
            }
        }
        AppEvent::UiEvent(UiEvent::SwapLanguages) => {
            if let Some(pair) = handle_swap(state, notifier).await {
                app_to_ui_tx.send(AppEvent::ShowLanguages(pair)).await?;
            }
        }
        AppEvent::UiEvent(UiEvent::SetLanguage1(code)) => {
            if let Some(pair) = handle_set_language(state, Slot::First, &code, notifier).await {
                app_to_ui_tx.send(AppEvent::ShowLanguages(pair)).await?;
            }
        }
        AppEvent::UiEvent(UiEvent::SetLanguage2(code)) => {
            if let Some(pair) = handle_set_language(state, Slot::Second, &code, notifier).await {
                app_to_ui_tx.send(AppEvent::ShowLanguages(pair)).await?;
            }
        }
        AppEvent::UiEvent(UiEvent::SetAutoCopy(enabled)) => {
            handle_set_auto_copy(state, enabled, notifier).await;
        }
        AppEvent::UiEvent(UiEvent::ListHistory) => {
            app_to_ui_tx
                .send(AppEvent::ShowHistory(state.history.list()))
                .await?;
        }
        AppEvent::UiEvent(UiEvent::ClearHistory) => {
            handle_clear_history(state, notifier).await;
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            app_to_ui_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
            return Ok(false);
        }
        AppEvent::ShowTranslation(_)
        | AppEvent::ShowHistory(_)
        | AppEvent::ShowLanguages(_)
        | AppEvent::Notify(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(true)
}
