/// Sink for short user-facing messages. Fire and forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
