use ceviri_config::logging::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr so the chat transcript on stdout stays clean
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(atty::is(atty::Stream::Stderr));

    if config.json {
        let fmt_layer = fmt_layer.json();
        tracing_subscriber::registry().with(filter).with(fmt_layer).init();
    } else {
        tracing_subscriber::registry().with(filter).with(fmt_layer).init();
    }
}
