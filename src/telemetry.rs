//! Diagnostic log. The terminal owns stdout, so events go to a JSON-lines file.

use std::env;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

use crate::config::Config;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

pub fn log_path() -> PathBuf {
    env::var("KEYTRAINER_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("keytrainer.jsonl"))
}

/// `None` means logging is switched off.
fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_ascii_lowercase().as_str() {
        "off" | "none" => None,
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => Some(Level::INFO),
    }
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}

/// Install the file subscriber once. An error means logging stays off for
/// this run; the caller reports it before the terminal is taken over.
pub fn init_tracing(config: &Config) -> Result<()> {
    let Some(level) = parse_level(&config.log_level) else {
        return Ok(());
    };
    if TRACING_INIT.get().is_some() {
        return Ok(());
    }

    let file = open_log(&log_path())?;
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(file)
        .with_current_span(false)
        .with_span_list(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    let _ = TRACING_INIT.set(());
    Ok(())
}
