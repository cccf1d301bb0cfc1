use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global subscriber with a console layer and a non-blocking
/// file layer. The returned guard must stay alive for the process lifetime or
/// buffered file writes are lost.
pub fn init_logging(log_level: &str, log_file: &str) -> WorkerGuard {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let file_appender = tracing_appender::rolling::never(".", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    tracing::info!("Logging initialized at level: {} (file: {})", log_level, log_file);
    guard
}
