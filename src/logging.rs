//! File logging
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `~/.spring-smart/spring-smart.log`. `RUST_LOG` takes precedence over the
//! configured level.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE: &str = "spring-smart.log";

/// Build the filter: RUST_LOG if set, otherwise the configured level
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file
///
/// Returns the log path, or `None` when the log directory is unavailable,
/// in which case nothing is logged.
pub fn init(config: &Config) -> Option<PathBuf> {
    let dir = Config::config_dir()?;
    init_in(&dir, config)
}

fn init_in(dir: &Path, config: &Config) -> Option<PathBuf> {
    fs::create_dir_all(dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .ok()?;

    Some(path)
}
