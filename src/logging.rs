use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing to a non-blocking stdout writer.
///
/// `RUST_LOG` wins when set; otherwise `debug` selects between `debug` and `info`.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_tracing(debug: bool) -> WorkerGuard {
    let default_filter = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    // Ignore re-initialization (tests may have installed a subscriber already)
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_target(false)
        .try_init();

    guard
}
