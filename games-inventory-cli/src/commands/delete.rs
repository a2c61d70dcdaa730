use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use games_inventory_db::{Filter, GameGateway};

use crate::CliError;

use super::item_address;

pub(crate) fn run_delete(gateway: &GameGateway, id: i64) -> Result<(), CliError> {
    match gateway.delete(&item_address(id), &Filter::all())? {
        0 => Err(CliError::NotFound(id)),
        _ => {
            log::info!("Game deleted");
            Ok(())
        }
    }
}

/// Delete every game, after confirmation.
pub(crate) fn run_delete_all(gateway: &GameGateway, confirm: bool) -> Result<(), CliError> {
    if !confirm {
        log::warn!("This will permanently delete every game in the inventory.");
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  games-inventory delete-all --confirm");
        return Ok(());
    }

    let deleted = gateway.delete_all()?;
    log::info!(
        "{}",
        format!("Deleted {} game(s).", deleted).if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
