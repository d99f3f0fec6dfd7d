//! Tracing setup: rolling log file plus optional pretty stdout output.

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global subscriber.
///
/// The returned guard owns the background log writer; hold it for the
/// lifetime of the process or buffered lines are lost on exit.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let appender = match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // RUST_LOG wins over the configured level; enable_tracing=false mutes
    // this crate while keeping dependency logs.
    let default_filter = if config.enable_tracing {
        config.log_level.clone()
    } else {
        format!("{},payrail=off", config.log_level)
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .with(fmt::layer().with_target(false).with_ansi(true))
            .init();
    }

    guard
}
