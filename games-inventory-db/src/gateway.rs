//! The record gateway: the only read/write boundary for game records.
//!
//! Every call takes an address string. Collection addresses work on the
//! whole table with the caller's filter; item addresses replace whatever
//! filter the caller passed with `_id = <id>`. Writes are validated before
//! the store is touched, and successful writes with a nonzero effect are
//! published to the registered observers.

use std::fmt;
use std::path::Path;

use games_inventory_core::{Column, Game, GameAddress, Genre, Platform, ResourceKind, TABLE_NAME};
use rusqlite::params_from_iter;
use thiserror::Error;

use crate::observer::{ChangeObserver, ObserverRegistry, SubscriptionId};
use crate::row::{Row, RowError};
use crate::schema::SchemaError;
use crate::statement::{Delete, Filter, Insert, OrderBy, Select, Update};
use crate::store::GameStore;
use crate::validation::{self, ValidationError};
use crate::values::GameValues;

/// Which gateway operation an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query,
    Insert,
    Update,
    Delete,
    Subscribe,
    ResolveKind,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "Query",
            Self::Insert => "Insertion",
            Self::Update => "Update",
            Self::Delete => "Deletion",
            Self::Subscribe => "Subscription",
            Self::ResolveKind => "Type lookup",
        })
    }
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{operation} is not supported for {address}")]
    UnsupportedAddress { operation: Operation, address: String },
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("SQLite error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("Row decoding error: {0}")]
    Row(#[from] RowError),
}

impl GatewayError {
    /// The failed field, for validation errors.
    pub fn invalid_field(&self) -> Option<Column> {
        match self {
            Self::Validation(e) => Some(e.field()),
            _ => None,
        }
    }
}

/// Result of selling one unit of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleOutcome {
    /// Stock was decremented; `remaining` units are left.
    Sold { remaining: i64 },
    /// Stock was already zero. Nothing was written.
    OutOfStock,
    /// No game has this id.
    NotFound,
}

pub struct GameGateway {
    store: GameStore,
    observers: ObserverRegistry,
}

impl GameGateway {
    pub fn new(store: GameStore) -> Self {
        Self {
            store,
            observers: ObserverRegistry::new(),
        }
    }

    /// Open the inventory at `path`, creating it on first use.
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        Ok(Self::new(GameStore::open(path)?))
    }

    pub fn open_memory() -> Result<Self, SchemaError> {
        Ok(Self::new(GameStore::open_memory()?))
    }

    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Register an observer for changes at `address`.
    ///
    /// With `include_descendants`, a collection subscription also hears about
    /// changes to individual items.
    pub fn subscribe(
        &mut self,
        address: &str,
        include_descendants: bool,
        observer: impl ChangeObserver + 'static,
    ) -> Result<SubscriptionId, GatewayError> {
        let parsed = parse(address, Operation::Subscribe)?;
        Ok(self.observers.subscribe(parsed, include_descendants, observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Classify an address.
    pub fn resource_kind(&self, address: &str) -> Result<ResourceKind, GatewayError> {
        Ok(parse(address, Operation::ResolveKind)?.kind())
    }

    /// Read rows. An empty projection selects every column.
    pub fn query(
        &self,
        address: &str,
        projection: &[Column],
        filter: &Filter,
        order: &[OrderBy],
    ) -> Result<Vec<Row>, GatewayError> {
        let parsed = parse(address, Operation::Query)?;
        let select = Select::new(TABLE_NAME)
            .columns(projection)
            .filter(effective_filter(&parsed, filter))
            .order_by(order);

        let (sql, params) = select.to_sql();
        log::debug!("{}", sql);
        let mut stmt = self.store.readable().prepare(&sql)?;
        let projection = select.projection();
        let rows = stmt.query_map(params_from_iter(params.iter()), |row| {
            Row::read(row, projection)
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Insert a new game at the collection address.
    ///
    /// Returns the new item address, or `None` if the store rejected the row.
    pub fn insert(
        &self,
        address: &str,
        values: &GameValues,
    ) -> Result<Option<GameAddress>, GatewayError> {
        let parsed = parse(address, Operation::Insert)?;
        if parsed != GameAddress::Collection {
            return Err(unsupported(Operation::Insert, address));
        }
        validation::validate_new(values)?;

        let (sql, params) = Insert::new(TABLE_NAME, values).to_sql();
        log::debug!("{}", sql);
        let conn = self.store.writable();
        if let Err(e) = conn.execute(&sql, params_from_iter(params.iter())) {
            log::error!("Failed to insert row for {}: {}", address, e);
            return Ok(None);
        }
        let id = conn.last_insert_rowid();

        self.observers.notify(&parsed);
        Ok(Some(GameAddress::Item(id)))
    }

    /// Apply a partial field set.
    ///
    /// Only the columns present in `values` are validated and written. An
    /// empty set returns 0 without touching the store. 0 also means no row
    /// matched.
    pub fn update(
        &self,
        address: &str,
        values: &GameValues,
        filter: &Filter,
    ) -> Result<usize, GatewayError> {
        let parsed = parse(address, Operation::Update)?;
        validation::validate_changes(values)?;

        if values.is_empty() {
            return Ok(0);
        }

        let (sql, params) =
            Update::new(TABLE_NAME, values, effective_filter(&parsed, filter)).to_sql();
        log::debug!("{}", sql);
        let updated = self
            .store
            .writable()
            .execute(&sql, params_from_iter(params.iter()))?;

        if updated != 0 {
            self.observers.notify(&parsed);
        }
        Ok(updated)
    }

    /// Delete matching rows. An empty filter on the collection deletes everything.
    pub fn delete(&self, address: &str, filter: &Filter) -> Result<usize, GatewayError> {
        let parsed = parse(address, Operation::Delete)?;
        let (sql, params) = Delete::new(TABLE_NAME, effective_filter(&parsed, filter)).to_sql();
        log::debug!("{}", sql);
        let deleted = self
            .store
            .writable()
            .execute(&sql, params_from_iter(params.iter()))?;

        if deleted != 0 {
            self.observers.notify(&parsed);
        }
        Ok(deleted)
    }

    /// Fetch one game by id.
    pub fn get_game(&self, id: i64) -> Result<Option<Game>, GatewayError> {
        let rows = self.query(
            &GameAddress::Item(id).to_string(),
            &[],
            &Filter::all(),
            &[],
        )?;
        rows.first().map(Row::to_game).transpose().map_err(Into::into)
    }

    /// Every game, ordered by id.
    pub fn list_games(&self) -> Result<Vec<Game>, GatewayError> {
        let rows = self.query(
            &GameAddress::collection_uri(),
            &[],
            &Filter::all(),
            &[OrderBy::asc(Column::Id)],
        )?;
        rows.iter()
            .map(|r| r.to_game().map_err(Into::into))
            .collect()
    }

    /// Sell one unit of the game at an item address.
    pub fn sell_one(&self, address: &str) -> Result<SaleOutcome, GatewayError> {
        if parse(address, Operation::Update)?.kind() != ResourceKind::Item {
            return Err(unsupported(Operation::Update, address));
        }

        let rows = self.query(address, &[Column::Quantity], &Filter::all(), &[])?;
        let Some(row) = rows.first() else {
            return Ok(SaleOutcome::NotFound);
        };
        let quantity = row
            .get(Column::Quantity)
            .and_then(|v| v.as_i64())
            .unwrap_or(0);
        if quantity <= 0 {
            return Ok(SaleOutcome::OutOfStock);
        }

        let remaining = quantity - 1;
        let changes = GameValues::new().quantity(remaining);
        if self.update(address, &changes, &Filter::all())? == 0 {
            return Ok(SaleOutcome::NotFound);
        }
        Ok(SaleOutcome::Sold { remaining })
    }

    /// Insert the stock sample game.
    pub fn insert_sample(&self) -> Result<Option<GameAddress>, GatewayError> {
        let values = GameValues::new()
            .name("BioShock Infinite")
            .genre(Genre::Action)
            .platform(Platform::XboxOne)
            .price(19.22)
            .quantity(5)
            .supplier_name("2K")
            .supplier_phone(Some("+1 (000) 000-0000".to_string()));
        self.insert(&GameAddress::collection_uri(), &values)
    }

    /// Delete every game.
    pub fn delete_all(&self) -> Result<usize, GatewayError> {
        self.delete(&GameAddress::collection_uri(), &Filter::all())
    }
}

impl fmt::Debug for GameGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameGateway")
            .field("store", &self.store)
            .field("observers", &self.observers)
            .finish()
    }
}

fn parse(address: &str, operation: Operation) -> Result<GameAddress, GatewayError> {
    GameAddress::parse(address).ok_or_else(|| unsupported(operation, address))
}

fn unsupported(operation: Operation, address: &str) -> GatewayError {
    GatewayError::UnsupportedAddress {
        operation,
        address: address.to_string(),
    }
}

/// Item addresses always filter by their id; the caller's filter is dropped.
fn effective_filter(address: &GameAddress, filter: &Filter) -> Filter {
    match address {
        GameAddress::Collection => filter.clone(),
        GameAddress::Item(id) => {
            if !filter.is_empty() {
                log::debug!("Ignoring caller filter for {}", address);
            }
            Filter::by_id(*id)
        }
    }
}
