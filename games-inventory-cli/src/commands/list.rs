use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use games_inventory_core::{CATALOG_PROJECTION, Column, GameAddress, Genre, Platform};
use games_inventory_db::{FieldValue, Filter, GameGateway, OrderBy, Row};

use crate::CliError;

use super::{format_price, item_address, truncate_str};

/// Print the catalog: one line per game.
pub(crate) fn run_list(gateway: &GameGateway) -> Result<(), CliError> {
    let rows = gateway.query(
        &GameAddress::collection_uri(),
        CATALOG_PROJECTION,
        &Filter::all(),
        &[OrderBy::asc(Column::Id)],
    )?;

    if rows.is_empty() {
        log::info!("The inventory is empty.");
        log::info!("Run 'games-inventory add' or 'games-inventory seed' to add a game.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{} game(s)", rows.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    for row in &rows {
        log::info!("{}", catalog_line(row));
    }
    Ok(())
}

fn catalog_line(row: &Row) -> String {
    let id = row.id().unwrap_or_default();
    let name = row
        .get(Column::Name)
        .and_then(FieldValue::as_str)
        .unwrap_or("");
    let genre = row
        .get(Column::Genre)
        .and_then(FieldValue::as_i64)
        .and_then(Genre::from_code)
        .unwrap_or_default();
    let platform = row
        .get(Column::Platform)
        .and_then(FieldValue::as_i64)
        .and_then(Platform::from_code)
        .unwrap_or_default();
    let price = row
        .get(Column::Price)
        .and_then(FieldValue::as_f64)
        .unwrap_or(0.0);
    let stock = row
        .get(Column::Quantity)
        .and_then(FieldValue::as_i64)
        .unwrap_or(0);

    let stock_text = if stock > 0 {
        format!("{} in stock", stock)
    } else {
        "out of stock".to_string()
    };

    format!(
        "  {:>4}  {:<32} {:<8} {:<14} {:>9}  {}",
        id,
        truncate_str(name, 32),
        genre.display_name(),
        platform.display_name(),
        format_price(price),
        if stock > 0 {
            stock_text.if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            stock_text.if_supports_color(Stdout, |t| t.red()).to_string()
        },
    )
}

/// Print every field of one game.
pub(crate) fn run_show(gateway: &GameGateway, id: i64) -> Result<(), CliError> {
    let game = gateway.get_game(id)?.ok_or(CliError::NotFound(id))?;

    log::info!("{}", game.name.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Address:        {}", item_address(game.id));
    log::info!("  Genre:          {}", game.genre);
    log::info!("  Platform:       {}", game.platform);
    log::info!("  Price:          {}", format_price(game.price));
    log::info!("  Quantity:       {}", game.quantity);
    log::info!("  Supplier:       {}", game.supplier_name);
    log::info!(
        "  Supplier phone: {}",
        game.supplier_phone.as_deref().unwrap_or("-")
    );
    Ok(())
}
