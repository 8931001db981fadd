//! Tracing setup for `pdk`.
//!
//! Diagnostics go to stderr so that `--json` and preview output on stdout stay
//! machine readable. A log file, when configured, is appended to across runs.

use postdesk_core::config::ResolvedConfig;
use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Flushes the file writer when the process exits.
static FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

pub fn init(cfg: &ResolvedConfig) {
    let logging = &cfg.logging;
    let console_level = parse_level(&logging.level).unwrap_or(LevelFilter::INFO);

    let console = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(use_color())
        .with_target(false)
        .without_time()
        .with_filter(filter_for(console_level));

    let Some(path) = logging.file.as_deref() else {
        tracing_subscriber::registry().with(console).init();
        return;
    };

    match open_log_file(path) {
        Ok(file) => {
            let file_level = logging
                .file_level
                .as_deref()
                .and_then(parse_level)
                .or_else(|| parse_level(&logging.level))
                .unwrap_or(LevelFilter::DEBUG);

            let (writer, guard) = tracing_appender::non_blocking(file);
            if let Ok(mut slot) = FILE_GUARD.lock() {
                *slot = Some(guard);
            }

            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_for(file_level));

            tracing_subscriber::registry().with(console).with(file_layer).init();
            tracing::debug!(profile = %cfg.active_profile, log_file = %path.display(), "logging started");
        }
        Err(e) => {
            // A broken log path should not stop the command itself.
            tracing_subscriber::registry().with(console).init();
            tracing::warn!(path = %path.display(), error = %e, "cannot open log file, logging to stderr only");
        }
    }
}

/// `RUST_LOG` directives still override the configured default.
fn filter_for(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn use_color() -> bool {
    io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
