//! SQLite persistence layer for the games inventory.
//!
//! [`GameStore`] owns the connections and creates the schema;
//! [`GameGateway`] routes addresses to statements, validates field sets,
//! and notifies observers after successful writes.

pub mod gateway;
pub mod observer;
pub mod row;
pub mod schema;
pub mod statement;
pub mod store;
pub mod validation;
pub mod values;

pub use gateway::{GameGateway, GatewayError, Operation, SaleOutcome};
pub use observer::{ChangeObserver, ObserverRegistry, SubscriptionId};
pub use row::{Row, RowError};
pub use schema::{SchemaError, open_database, open_memory};
pub use statement::{Comparison, Condition, Delete, Direction, Filter, Insert, OrderBy, Select, Update};
pub use store::GameStore;
pub use validation::ValidationError;
pub use values::{FieldValue, GameValues};
