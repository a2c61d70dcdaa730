//! Table and column definitions for the games inventory.

/// Name of the single table holding game records.
pub const TABLE_NAME: &str = "games";

/// Columns of the `games` table.
///
/// Statements are only ever built from these names, never from caller text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Id,
    Name,
    Genre,
    Platform,
    Price,
    Quantity,
    SupplierName,
    SupplierPhone,
}

const ALL_COLUMNS: &[Column] = &[
    Column::Id,
    Column::Name,
    Column::Genre,
    Column::Platform,
    Column::Price,
    Column::Quantity,
    Column::SupplierName,
    Column::SupplierPhone,
];

/// Columns the catalog list displays.
pub const CATALOG_PROJECTION: &[Column] = &[
    Column::Id,
    Column::Name,
    Column::Genre,
    Column::Platform,
    Column::Price,
    Column::Quantity,
];

impl Column {
    /// SQL column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "_id",
            Self::Name => "name",
            Self::Genre => "genre",
            Self::Platform => "platform",
            Self::Price => "price",
            Self::Quantity => "quantity",
            Self::SupplierName => "supplier_name",
            Self::SupplierPhone => "supplier_phone",
        }
    }

    /// Every column in table order.
    pub fn all() -> &'static [Column] {
        ALL_COLUMNS
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ColumnParseError(pub String);

impl std::fmt::Display for ColumnParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown column: '{}'", self.0)
    }
}

impl std::error::Error for ColumnParseError {}

impl std::str::FromStr for Column {
    type Err = ColumnParseError;

    /// Accepts the SQL name, plus `id` for `_id`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "id" {
            return Ok(Self::Id);
        }
        ALL_COLUMNS
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| ColumnParseError(s.to_string()))
    }
}

/// `CREATE TABLE` statement for the games table.
pub const CREATE_GAMES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS games (
    _id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    genre INTEGER NOT NULL,
    platform INTEGER NOT NULL,
    price REAL NOT NULL DEFAULT 0,
    quantity INTEGER NOT NULL DEFAULT 0,
    supplier_name TEXT NOT NULL,
    supplier_phone TEXT
);
"#;
