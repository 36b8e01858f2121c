//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/textdiff/`, `~/.cache/textdiff/`
//! - macOS: `~/Library/Application Support/textdiff/`, `~/Library/Caches/textdiff/`
//! - Windows: `%APPDATA%\textdiff\`, `%LOCALAPPDATA%\textdiff\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "textdiff";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the application config directory
///
/// Only read from, so it is not created here.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}
