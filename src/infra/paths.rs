// src/infra/paths.rs — Config file location
//
// CHATGATE_HOME overrides everything. Otherwise config lives in ~/.chatgate/.

use std::path::PathBuf;

/// Returns the CHATGATE_HOME override, if set.
fn chatgate_home() -> Option<PathBuf> {
    std::env::var_os("CHATGATE_HOME").map(PathBuf::from)
}

/// Configuration directory: $CHATGATE_HOME/ or ~/.chatgate/
pub fn config_dir() -> PathBuf {
    if let Some(home) = chatgate_home() {
        return home;
    }
    match directories::BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(".chatgate"),
        // No resolvable home (e.g. minimal containers): stay relative to cwd
        None => PathBuf::from(".chatgate"),
    }
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
