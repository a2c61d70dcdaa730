use games_inventory_db::{Filter, GameGateway};

use crate::CliError;
use crate::cli_types::GameFieldArgs;

use super::{field_values, item_address};

/// Write only the given fields of one game.
pub(crate) fn run_edit(
    gateway: &GameGateway,
    id: i64,
    fields: &GameFieldArgs,
    clear_phone: bool,
) -> Result<(), CliError> {
    let mut values = field_values(fields);
    if clear_phone {
        values = values.supplier_phone(None);
    }
    if values.is_empty() {
        log::info!("Nothing to change.");
        return Ok(());
    }

    let updated = gateway.update(&item_address(id), &values, &Filter::all())?;
    if updated == 0 {
        log::warn!("No game updated (id {} not found or nothing changed)", id);
    } else {
        log::info!("Game updated");
    }
    Ok(())
}
