use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging options.
///
/// Diagnostics always go to stderr; stdout belongs to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is not set
    pub default_level: String,
    /// Forces the `debug` level, ignoring `default_level`
    pub debug_mode: bool,
    /// Directory for daily rotating log files; no file output when `None`
    pub log_dir: Option<Utf8PathBuf>,
    pub log_prefix: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            default_level: "error".to_string(),
            debug_mode: false,
            log_dir: None,
            log_prefix: "load-extensions".to_string(),
        }
    }
}

impl LogSettings {
    fn env_filter(&self) -> EnvFilter {
        if self.debug_mode {
            return EnvFilter::new("debug");
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_level))
    }
}

/// Setup logging with stderr output and an optional rotating file appender.
///
/// # Returns
/// A guard that must be held for the duration of the program to keep file
/// logging active, or `None` when no log directory is configured
pub fn setup_logging(settings: &LogSettings) -> Result<Option<WorkerGuard>> {
    let mut guard = None;

    let file_layer = match &settings.log_dir {
        Some(log_dir) => {
            if !log_dir.exists() {
                fs::create_dir_all(log_dir)
                    .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
            }

            let file_appender = rolling::daily(log_dir, &settings.log_prefix);
            let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(worker_guard);

            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false) // No ANSI codes in log files
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
        }
        None => None,
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(settings.env_filter())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(
        "Logging initialized: level={}, debug={}, log_dir={:?}",
        settings.default_level,
        settings.debug_mode,
        settings.log_dir
    );

    Ok(guard)
}
