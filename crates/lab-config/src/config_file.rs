use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".reducer-lab.toml";

/// Load config file content
///
/// Searches for `.reducer-lab.toml` in:
/// 1. Current working directory
/// 2. Home directory
/// 3. The XDG config directory as `config.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    let candidates = [
        get_home_config_path(),
        crate::paths::app_config_path().ok(),
    ];

    for path in candidates.into_iter().flatten() {
        if let Ok(content) = std::fs::read_to_string(&path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}

/// Returns ~/.reducer-lab.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
