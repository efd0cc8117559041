//! File logging
//!
//! The terminal belongs to the game screen, so log records go to a file.

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "VARIANT_SNAKE_LOG";
/// Environment variable holding the log level (`error` .. `trace`, or `off`)
pub const LOG_LEVEL_ENV: &str = "VARIANT_SNAKE_LOG_LEVEL";
pub const DEFAULT_LOG_FILE: &str = "variant_snake.log";

pub fn init_logger() -> Result<PathBuf> {
    let path = std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let level = level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref());

    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;

    Ok(path)
}

/// Parses a level name, falling back to `Info` for anything unrecognized
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
