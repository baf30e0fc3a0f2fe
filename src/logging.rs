//! Logging configuration using tracing with file appender.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize tracing.
///
/// With a log path, events go to a non-blocking file appender; the returned
/// guard must be held for the duration of the program to ensure logs are
/// flushed. Without one, events go to stderr so they never mix with sample
/// text on stdout.
pub fn init_logging(log_path: Option<&Path>, level: Option<&str>) -> Option<WorkerGuard> {
    let level = level.unwrap_or("info");
    let filter =
        EnvFilter::try_new(format!("docsnips={level}")).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_path {
        Some(log_path) => {
            let parent = log_path.parent().unwrap_or(Path::new("."));
            let filename = log_path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("docsnips.log"));

            let file_appender = tracing_appender::rolling::never(parent, filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();

            Some(guard)
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();

            None
        }
    }
}
