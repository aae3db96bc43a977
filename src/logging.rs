use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global tracing subscriber for processes embedding the engine.
///
/// Console output stays human-readable; file output is JSON, rotated daily
/// under `logs/`. The `RUST_LOG` filter applies on top of the crate default.
pub fn init_logging() {
    let _ = std::fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "normalizer.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::from_default_env()
        .add_directive("listing_normalizer=info".parse().expect("valid log directive"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();

    // The guard must outlive the process or buffered logs are dropped on exit.
    std::mem::forget(guard);
}
