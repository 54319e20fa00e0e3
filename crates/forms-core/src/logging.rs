//! File logging for the `fsform` binary
//!
//! Rendered HTML goes to stdout, so all diagnostics are written to a daily
//! rolling file instead.

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "FSFORM_LOG";

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "FSFORM_LOG_DIR";

const LOG_FILE_PREFIX: &str = "fsform.log";

const DEFAULT_FILTER: &str = "flextype_forms=info,forms_core=info,forms_app=info,forms_render=info,warn";

/// Initialize the logging subsystem
///
/// Logs go to `$FSFORM_LOG_DIR` or `~/.local/share/flextype-forms/logs/`.
/// The level is controlled by `FSFORM_LOG`.
///
/// # Examples
/// ```bash
/// FSFORM_LOG=forms_render=trace fsform render site/fieldsets/page.yaml
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("fsform {} logging to {}", env!("CARGO_PKG_VERSION"), log_dir.display());

    Ok(())
}

/// Directory the log files are written to
pub fn log_directory() -> PathBuf {
    resolve_log_directory(std::env::var_os(LOG_DIR_ENV).map(PathBuf::from))
}

fn resolve_log_directory(override_dir: Option<PathBuf>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flextype-forms")
            .join("logs"),
    }
}

/// Path of today's log file.
///
/// The daily appender suffixes the file name with the UTC date.
pub fn get_current_log_file() -> PathBuf {
    log_file_for(&log_directory(), chrono::Utc::now().date_naive())
}

fn log_file_for(dir: &Path, day: chrono::NaiveDate) -> PathBuf {
    dir.join(format!("{}.{}", LOG_FILE_PREFIX, day.format("%Y-%m-%d")))
}
