use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use games_inventory_core::{Settings, settings};

use crate::CliError;

/// Show the resolved database path and its source.
pub(crate) fn run_config_show(db: Option<PathBuf>) -> Result<(), CliError> {
    let settings_file = settings::settings_path();
    let loaded = Settings::load().map_err(|e| CliError::config(e.to_string()))?;

    log::info!(
        "{}",
        "Games Inventory Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    let status = if settings_file.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  Settings file: {} {}",
        settings_file.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );

    let source = if db.is_some() {
        "--db".to_string()
    } else if std::env::var_os(settings::DATABASE_ENV_VAR).is_some_and(|v| !v.is_empty()) {
        settings::DATABASE_ENV_VAR.to_string()
    } else if loaded.storage.database.is_some() {
        "settings.toml".to_string()
    } else {
        "default".to_string()
    };
    let path = settings::resolve_database_path(db, &loaded);
    log::info!(
        "  Database:      {} ({})",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        source,
    );
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}
