//! One-shot subcommands that run without the event loop.

use anyhow::{Context, bail};
use ceviri_core::{Language, Message, Notifier};

use crate::cli::SettingsAction;
use crate::events::text_input::{auto_copy, handle_text_input};
use crate::notify::ConsoleNotifier;
use crate::state::AppState;
use crate::ui::{print_history, print_pair, print_record, print_settings};

pub async fn translate(state: &AppState, words: &[String]) -> anyhow::Result<()> {
    let text = words.join(" ");
    let notifier = ConsoleNotifier;

    let Some(record) = handle_text_input(state, &text, &notifier).await else {
        bail!("translation failed");
    };

    print_record(&record);
    auto_copy(state, &record, &notifier).await;
    Ok(())
}

pub async fn history(state: &AppState, limit: usize, clear: bool) -> anyhow::Result<()> {
    let locale = state.locale().await;

    if clear {
        state.history.clear().context("failed to clear history")?;
        ConsoleNotifier.notify(Message::HistoryCleared.localized(locale));
        return Ok(());
    }

    let records = state.history.list();
    let shown = &records[..records.len().min(limit)];
    print_history(shown, locale);
    Ok(())
}

pub async fn settings(state: &AppState, action: Option<SettingsAction>) -> anyhow::Result<()> {
    let locale = state.locale().await;
    let settings = &state.settings;

    match action.unwrap_or(SettingsAction::Show) {
        SettingsAction::Show => {}
        SettingsAction::Lang1 { code } => settings.set_language1(&parse_language(&code)?)?,
        SettingsAction::Lang2 { code } => settings.set_language2(&parse_language(&code)?)?,
        SettingsAction::Swap => {
            let pair = settings.swap_languages()?;
            ConsoleNotifier.notify(Message::LanguagesSwapped.localized(locale));
            print_pair(&pair);
            return Ok(());
        }
        SettingsAction::Theme { theme } => settings.set_theme(theme)?,
        SettingsAction::TextSize { size } => settings.set_text_size(size)?,
        SettingsAction::AutoCopy { enabled } => {
            settings.set_auto_copy(enabled)?;
            let message = if enabled {
                Message::AutoCopyOn
            } else {
                Message::AutoCopyOff
            };
            ConsoleNotifier.notify(message.localized(locale));
        }
    }

    print_settings(&settings.snapshot());
    Ok(())
}

fn parse_language(code: &str) -> anyhow::Result<Language> {
    Language::from_code(code).with_context(|| format!("unsupported language code: {code}"))
}
