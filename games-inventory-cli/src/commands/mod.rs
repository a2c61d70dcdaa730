pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod list;
pub(crate) mod sell;

use std::path::PathBuf;

use games_inventory_core::{GameAddress, Settings, settings};
use games_inventory_db::{GameGateway, GameValues};

use crate::CliError;
use crate::cli_types::GameFieldArgs;

/// Resolve the database path and open the gateway on it.
pub(crate) fn open_gateway(db: Option<PathBuf>) -> Result<GameGateway, CliError> {
    let settings = Settings::load().map_err(|e| CliError::config(e.to_string()))?;
    let path = settings::resolve_database_path(db, &settings);
    log::debug!("Opening inventory at {}", path.display());

    let mut gateway = GameGateway::open(&path)?;
    gateway.subscribe(&GameAddress::collection_uri(), true, |address: &GameAddress| {
        log::debug!("Inventory changed at {}", address);
    })?;
    Ok(gateway)
}

pub(crate) fn item_address(id: i64) -> String {
    GameAddress::Item(id).to_string()
}

/// Only the fields the user actually passed.
pub(crate) fn field_values(fields: &GameFieldArgs) -> GameValues {
    let mut values = GameValues::new();
    if let Some(name) = &fields.name {
        values = values.name(name.trim());
    }
    if let Some(genre) = fields.genre {
        values = values.genre(genre);
    }
    if let Some(platform) = fields.platform {
        values = values.platform(platform);
    }
    if let Some(price) = fields.price {
        values = values.price(price);
    }
    if let Some(quantity) = fields.quantity {
        values = values.quantity(quantity);
    }
    if let Some(supplier) = &fields.supplier_name {
        values = values.supplier_name(supplier.trim());
    }
    if let Some(phone) = &fields.supplier_phone {
        values = values.supplier_phone(Some(phone.trim().to_string()));
    }
    values
}

/// Format a price for display, e.g. `$19.99`.
pub(crate) fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max).collect()
    }
}
