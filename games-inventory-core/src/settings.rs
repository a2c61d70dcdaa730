//! Shared settings: where the inventory database lives.
//!
//! The settings file is `~/.config/games-inventory/settings.toml`:
//!
//! ```toml
//! [storage]
//! database = "/path/to/inventory.db"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the database path.
pub const DATABASE_ENV_VAR: &str = "GAMES_INVENTORY_DB";

/// File name of the default database.
pub const DATABASE_NAME: &str = "inventory.db";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub database: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from the canonical settings file.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }
}

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("games-inventory").join("settings.toml")
}

/// Database path used when nothing else is configured.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("games-inventory").join(DATABASE_NAME)
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `GAMES_INVENTORY_DB` environment variable
/// 3. `storage.database` in `settings.toml`
/// 4. [`default_database_path`]
pub fn resolve_database_path(
    cli_override: Option<PathBuf>,
    settings: &Settings,
) -> PathBuf {
    resolve_with_env(cli_override, std::env::var_os(DATABASE_ENV_VAR), settings)
}

fn resolve_with_env(
    cli_override: Option<PathBuf>,
    env: Option<std::ffi::OsString>,
    settings: &Settings,
) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = env.filter(|v| !v.is_empty()) {
        log::debug!("Using database path from {}", DATABASE_ENV_VAR);
        return PathBuf::from(p);
    }
    if let Some(p) = &settings.storage.database {
        return p.clone();
    }
    default_database_path()
}
