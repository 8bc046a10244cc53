// SPDX-License-Identifier: MPL-2.0
//! Tracing setup: a daily-rolling log file under `<data dir>/logs`.
//!
//! The returned [`LoggingGuard`] must outlive the application, otherwise the
//! background writer is dropped and buffered lines are lost.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::app::paths;

const LOG_FILE_PREFIX: &str = "pedidos_backoffice.log";
const DEFAULT_FILTER: &str = "pedidos_backoffice=info";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Directory of the log files; `None` when logging goes to stderr.
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = paths::get_app_data_dir()
        .map(|dir| dir.join("logs"))
        .ok_or_else(|| std::io::Error::other("no data directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Installs the global subscriber.
///
/// Logs go to stderr when no log directory can be created. Returns `None`
/// when a subscriber is already installed; the application keeps running
/// either way.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = match ensure_log_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            eprintln!("File logging disabled: {err}");
            None
        }
    };

    let (non_blocking, guard) = match &log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    match &log_dir {
        Some(dir) => tracing::info!(log_dir = %dir.display(), "tracing initialized"),
        None => tracing::info!("tracing initialized on stderr"),
    }

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
    })
}
