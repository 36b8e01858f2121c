use crate::error::ConfigError;
use crate::paths;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".textdiff.toml";

/// Candidate config files, in lookup order.
///
/// 1. `.textdiff.toml` in the current working directory
/// 2. `config.toml` in the user config directory (`~/.config/textdiff/` on Linux)
fn candidates() -> Vec<PathBuf> {
    let mut found = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    match paths::app_config_path() {
        Ok(path) => found.push(path),
        Err(e) => log::debug!("Skipping user config: {}", e),
    }
    found
}

/// Find the first existing config file.
pub fn find_config_file() -> Option<PathBuf> {
    candidates().into_iter().find(|p| p.is_file())
}

/// Load config file content from CWD first, then the config directory.
///
/// Returns `Ok(None)` when no config file exists.
pub fn load_config_file() -> Result<Option<(PathBuf, String)>, ConfigError> {
    let Some(path) = find_config_file() else {
        return Ok(None);
    };

    let content = read(&path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(Some((path, content)))
}

pub(crate) fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
