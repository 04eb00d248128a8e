//! Terminal front end: reads lines from stdin, renders app events to stdout.

use std::io::Write;

use ceviri_core::types::{AppEvent, UiEvent};
use ceviri_core::{LanguagePair, Locale, Message, SUPPORTED_LANGUAGES, TranslationRecord};
use ceviri_store::Settings;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

/// A parsed line of chat input
#[derive(Debug)]
pub enum Input {
    Event(AppEvent),
    Languages,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Lines starting with `/` are commands, everything else is text to translate
pub fn parse_line(line: &str) -> Input {
    if line.trim().is_empty() {
        return Input::Empty;
    }

    let Some(command) = line.trim().strip_prefix('/') else {
        return Input::Event(AppEvent::TextInput(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    let event = match (name.as_str(), arg) {
        ("swap", None) => UiEvent::SwapLanguages,
        ("lang1", Some(code)) => UiEvent::SetLanguage1(code.to_string()),
        ("lang2", Some(code)) => UiEvent::SetLanguage2(code.to_string()),
        ("autocopy", Some("on" | "true")) => UiEvent::SetAutoCopy(true),
        ("autocopy", Some("off" | "false")) => UiEvent::SetAutoCopy(false),
        ("history", None) => UiEvent::ListHistory,
        ("clear", None) => UiEvent::ClearHistory,
        ("languages", None) => return Input::Languages,
        ("help", _) => return Input::Help,
        ("quit" | "exit", None) => return Input::Quit,
        _ => return Input::Unknown(line.trim().to_string()),
    };

    Input::Event(AppEvent::UiEvent(event))
}

/// Renders app events until the backend echoes `Close` or `cancel` fires.
///
/// Input is read on its own task, so a full `ui_to_app` channel never stops
/// this loop from draining `app_to_ui`.
pub async fn ui_loop<R>(
    input: R,
    interactive: bool,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    locale: Locale,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    if interactive {
        print_help();
    }

    let reader = tokio::spawn(input_loop(input, interactive, ui_to_app_tx));

    let result = loop {
        tokio::select! {
            _ = cancel.cancelled() => break Ok(()),
            event = app_to_ui_rx.recv() => {
                match event {
                    Ok(AppEvent::UiEvent(UiEvent::Close)) => break Ok(()),
                    Ok(event) => {
                        render(event, locale);
                        prompt(interactive);
                    }
                    Err(e) => break Err(e.into()),
                }
            }
        }
    };

    reader.abort();
    tracing::debug!("UI loop finished");
    result
}

/// Forwards parsed lines to the backend; sends `Close` on EOF or `/quit`
async fn input_loop<R>(
    input: R,
    interactive: bool,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        match parse_line(&line) {
            Input::Event(event) => ui_to_app_tx.send(event).await?,
            Input::Languages => {
                print_languages();
                prompt(interactive);
            }
            Input::Help => {
                print_help();
                prompt(interactive);
            }
            Input::Quit => break,
            Input::Empty => prompt(interactive),
            Input::Unknown(command) => {
                eprintln!("Unknown command: {command} (try /help)");
                prompt(interactive);
            }
        }
    }

    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
    tracing::debug!("Input closed");
    Ok(())
}

fn render(event: AppEvent, locale: Locale) {
    match event {
        AppEvent::ShowTranslation(record) => print_record(&record),
        AppEvent::ShowHistory(records) => print_history(&records, locale),
        AppEvent::ShowLanguages(pair) => print_pair(&pair),
        AppEvent::Notify(message) => println!("* {message}"),
        AppEvent::TextInput(_) | AppEvent::UiEvent(_) => {}
    }
}

fn prompt(interactive: bool) {
    if interactive {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}

pub fn print_record(record: &TranslationRecord) {
    println!("{} → {}", record.source_lang, record.target_lang);
    println!("  {}", record.source_text.trim());
    println!("  {}", record.translated_text);
}

pub fn print_history(records: &[TranslationRecord], locale: Locale) {
    if records.is_empty() {
        println!("{}", Message::HistoryEmpty.localized(locale));
        return;
    }

    // Stored newest first, shown oldest first like a chat transcript
    for record in records.iter().rev() {
        println!("[{}]", record.timestamp);
        print_record(record);
    }
}

pub fn print_pair(pair: &LanguagePair) {
    println!("{} ⇄ {}", pair.lang1, pair.lang2);
}

pub fn print_languages() {
    for lang in SUPPORTED_LANGUAGES {
        println!("{:<3} {}", lang.code, lang);
    }
}

pub fn print_settings(settings: &Settings) {
    println!("language1: {}", settings.language1);
    println!("language2: {}", settings.language2);
    println!("theme:     {}", settings.theme);
    println!("text size: {}px", settings.text_size);
    println!("auto copy: {}", settings.auto_copy);
}

fn print_help() {
    println!("Type text and press Enter to translate. Commands:");
    println!("  /swap               swap the two languages");
    println!("  /lang1 <code>       set the first language");
    println!("  /lang2 <code>       set the second language");
    println!("  /autocopy on|off    copy translations automatically");
    println!("  /history            show translation history");
    println!("  /clear              clear translation history");
    println!("  /languages          list supported languages");
    println!("  /quit               exit");
}
