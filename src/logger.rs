//! File-based logging using simplelog
//!
//! The terminal belongs to the UI, so log records go to
//! `diffnav.log` in the platform cache directory (`~/.cache/diffnav/` on
//! Linux). Debug builds log to the current directory instead.
//!
//! The level comes from `DIFFNAV_LOG` (error, warn, info, debug, trace).

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

const LOG_FILE: &str = "diffnav.log";
const LEVEL_ENV: &str = "DIFFNAV_LOG";

/// Get the log file path based on build type
fn log_file_path() -> Result<PathBuf> {
    if cfg!(debug_assertions) {
        return Ok(PathBuf::from(LOG_FILE));
    }

    let dirs = ProjectDirs::from("", "", "diffnav").context("Could not determine cache directory")?;
    let dir = dirs.cache_dir();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir.join(LOG_FILE))
}

fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize file-based logging.
///
/// Returns the path of the log file.
pub fn init() -> Result<PathBuf> {
    let log_file = log_file_path()?;

    let level = std::env::var(LEVEL_ENV)
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Could not create log file {}", log_file.display()))?;

    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" TRACE "), LevelFilter::Trace);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }
}
