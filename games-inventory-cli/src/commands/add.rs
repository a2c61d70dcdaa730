use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use games_inventory_core::{Column, GameAddress};
use games_inventory_db::GameGateway;

use crate::CliError;
use crate::cli_types::GameFieldArgs;

use super::field_values;

/// Add a game. Price and quantity default to 0 when not given.
pub(crate) fn run_add(gateway: &GameGateway, fields: &GameFieldArgs) -> Result<(), CliError> {
    if is_blank(fields) {
        log::info!("Nothing to save: no fields were given.");
        return Ok(());
    }

    let mut values = field_values(fields);
    if !values.contains(Column::Genre) {
        values = values.genre(Default::default());
    }
    if !values.contains(Column::Platform) {
        values = values.platform(Default::default());
    }
    if !values.contains(Column::Price) {
        values = values.price(0.0);
    }
    if !values.contains(Column::Quantity) {
        values = values.quantity(0);
    }

    report_insert(gateway.insert(&GameAddress::collection_uri(), &values)?);
    Ok(())
}

/// Insert the sample game.
pub(crate) fn run_seed(gateway: &GameGateway) -> Result<(), CliError> {
    report_insert(gateway.insert_sample()?);
    Ok(())
}

fn report_insert(result: Option<GameAddress>) {
    match result {
        Some(address) => log::info!(
            "{} {}",
            "Game saved:".if_supports_color(Stdout, |t| t.green()),
            address,
        ),
        None => log::warn!("Error with saving game"),
    }
}

/// No field was typed in at all.
fn is_blank(fields: &GameFieldArgs) -> bool {
    let empty = |s: &Option<String>| s.as_deref().is_none_or(|v| v.trim().is_empty());
    empty(&fields.name)
        && empty(&fields.supplier_name)
        && empty(&fields.supplier_phone)
        && fields.genre.is_none()
        && fields.platform.is_none()
        && fields.price.is_none()
        && fields.quantity.is_none()
}
