use ceviri_core::types::{AppEvent, UiEvent};

use crate::ui::{Input, parse_line};

#[test]
fn test_plain_text_is_translated_verbatim() {
    match parse_line("  merhaba dünya ") {
        Input::Event(AppEvent::TextInput(text)) => assert_eq!(text, "  merhaba dünya "),
        other => panic!("unexpected input: {other:?}"),
    }
}

#[test]
fn test_blank_lines_are_ignored() {
    assert!(matches!(parse_line(""), Input::Empty));
    assert!(matches!(parse_line("   \t"), Input::Empty));
}

#[test]
fn test_language_commands() {
    assert!(matches!(
        parse_line("/swap"),
        Input::Event(AppEvent::UiEvent(UiEvent::SwapLanguages))
    ));
    match parse_line("/lang1 de") {
        Input::Event(AppEvent::UiEvent(UiEvent::SetLanguage1(code))) => assert_eq!(code, "de"),
        other => panic!("unexpected input: {other:?}"),
    }
    match parse_line("/LANG2 ja") {
        Input::Event(AppEvent::UiEvent(UiEvent::SetLanguage2(code))) => assert_eq!(code, "ja"),
        other => panic!("unexpected input: {other:?}"),
    }
    assert!(matches!(parse_line("/languages"), Input::Languages));
}

#[test]
fn test_auto_copy_toggle() {
    assert!(matches!(
        parse_line("/autocopy on"),
        Input::Event(AppEvent::UiEvent(UiEvent::SetAutoCopy(true)))
    ));
    assert!(matches!(
        parse_line("/autocopy false"),
        Input::Event(AppEvent::UiEvent(UiEvent::SetAutoCopy(false)))
    ));
    assert!(matches!(parse_line("/autocopy maybe"), Input::Unknown(_)));
}

#[test]
fn test_history_and_session_commands() {
    assert!(matches!(
        parse_line("/history"),
        Input::Event(AppEvent::UiEvent(UiEvent::ListHistory))
    ));
    assert!(matches!(
        parse_line("/clear"),
        Input::Event(AppEvent::UiEvent(UiEvent::ClearHistory))
    ));
    assert!(matches!(parse_line("/help"), Input::Help));
    assert!(matches!(parse_line("/quit"), Input::Quit));
    assert!(matches!(parse_line("/exit"), Input::Quit));
}

#[test]
fn test_unknown_or_malformed_commands() {
    assert!(matches!(parse_line("/frobnicate"), Input::Unknown(_)));
    assert!(matches!(parse_line("/lang1"), Input::Unknown(_)));
    assert!(matches!(parse_line("/swap now"), Input::Unknown(_)));
    assert!(matches!(parse_line("/"), Input::Unknown(_)));
}
