//! Logging Infrastructure
//!
//! Structured logging for the kiosk. `RUST_LOG` wins over the configured level.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Rolling log file prefix
const LOG_FILE_PREFIX: &str = "order-kiosk";

/// Initialize the logger at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// When `log_dir` exists, output goes to a daily rolling file instead of stdout.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("order_kiosk={level},shared={level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            // try_init: a second call (tests, embedding) keeps the first subscriber
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
    }

    let _ = subscriber.try_init();
}
