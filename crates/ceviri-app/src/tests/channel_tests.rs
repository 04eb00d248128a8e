use ceviri_core::Notifier;
use ceviri_core::types::AppEvent;

use crate::controller::ChannelSet;
use crate::notify::ChannelNotifier;

#[test]
fn test_notifications_are_kept_without_a_reader() {
    let channels = ChannelSet::new();
    let notifier = ChannelNotifier::new(channels.app_to_ui.0.clone());

    for i in 0..500 {
        notifier.notify(&format!("message {i}"));
    }

    let rx = &channels.app_to_ui.1;
    assert_eq!(rx.len(), 500);
    match rx.try_recv() {
        Ok(Some(AppEvent::Notify(message))) => assert_eq!(message, "message 0"),
        other => panic!("unexpected receive: {other:?}"),
    }
}
