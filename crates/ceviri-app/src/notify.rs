use ceviri_core::Notifier;
use ceviri_core::types::AppEvent;
use kanal::AsyncSender;

/// Forwards notifications to the UI loop. Expects an unbounded channel;
/// on a bounded one a full queue drops the message with a warning.
pub struct ChannelNotifier {
    tx: AsyncSender<AppEvent>,
}

impl ChannelNotifier {
    pub fn new(tx: AsyncSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str) {
        match self.tx.try_send(AppEvent::Notify(message.to_string())) {
            Ok(true) => {}
            Ok(false) => tracing::warn!("UI channel full, dropped notification: {}", message),
            Err(e) => tracing::warn!("UI channel closed, dropped notification: {}", e),
        }
    }
}

/// Prints notifications to stderr, for one-shot commands
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
