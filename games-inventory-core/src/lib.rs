//! Core types for the games inventory: the table contract, the closed
//! genre/platform sets, the typed game record, logical addresses, and
//! shared settings.

pub mod address;
pub mod contract;
pub mod game;
pub mod genre;
pub mod platform;
pub mod settings;

pub use address::{AddressParseError, GameAddress, ResourceKind};
pub use contract::{CATALOG_PROJECTION, Column, ColumnParseError, TABLE_NAME};
pub use game::{Game, NewGame};
pub use genre::{Genre, GenreParseError};
pub use platform::{Platform, PlatformParseError};
pub use settings::{Settings, SettingsError};
