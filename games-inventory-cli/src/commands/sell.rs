use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use games_inventory_db::{GameGateway, SaleOutcome};

use crate::CliError;

use super::item_address;

pub(crate) fn run_sell(gateway: &GameGateway, id: i64) -> Result<(), CliError> {
    match gateway.sell_one(&item_address(id))? {
        SaleOutcome::Sold { remaining: 0 } => {
            log::info!("Sold one unit.");
            log::warn!("{}", "This game is now out of stock".if_supports_color(Stdout, |t| t.yellow()));
        }
        SaleOutcome::Sold { remaining } => {
            log::info!("Sold one unit, {} left.", remaining);
        }
        SaleOutcome::OutOfStock => {
            log::warn!("{}", "This game is out of stock".if_supports_color(Stdout, |t| t.yellow()));
        }
        SaleOutcome::NotFound => return Err(CliError::NotFound(id)),
    }
    Ok(())
}
