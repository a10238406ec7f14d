// File: src/logging.rs
// File logger for embedding applications that have none of their own.
use crate::context::AppContext;
use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Installs a global logger appending to `taskintake.log` in the data
/// directory and returns that path.
///
/// The `log` facade accepts a single logger per process; a second call fails.
pub fn init_logger(ctx: &dyn AppContext, level: LevelFilter) -> Result<PathBuf> {
    let path = ctx.get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();

    WriteLogger::init(level, config, file).context("A logger is already installed")?;
    log::info!("Logging to {:?} at level {}", path, level);
    Ok(path)
}
