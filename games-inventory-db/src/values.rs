//! Field sets passed to insert and update.

use std::collections::BTreeMap;

use games_inventory_core::{Column, Genre, NewGame, Platform};
use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value, ValueRef};

/// A single column value, as stored or as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Real(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn from_sql(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Integer(i),
            ValueRef::Real(f) => Self::Real(f),
            ValueRef::Text(t) | ValueRef::Blob(t) => {
                Self::Text(String::from_utf8_lossy(t).into_owned())
            }
        }
    }
}

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Null => ToSqlOutput::Owned(Value::Null),
            Self::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            Self::Real(f) => ToSqlOutput::Owned(Value::Real(*f)),
            Self::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Genre> for FieldValue {
    fn from(v: Genre) -> Self {
        Self::Integer(v.code())
    }
}

impl From<Platform> for FieldValue {
    fn from(v: Platform) -> Self {
        Self::Integer(v.code())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// A set of column values: complete for inserts, partial for updates.
///
/// Columns iterate in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameValues {
    values: BTreeMap<Column, FieldValue>,
}

impl GameValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set any column to any value. Values are checked by the gateway, not here.
    pub fn put(&mut self, column: Column, value: impl Into<FieldValue>) -> &mut Self {
        self.values.insert(column, value.into());
        self
    }

    pub fn with(mut self, column: Column, value: impl Into<FieldValue>) -> Self {
        self.put(column, value);
        self
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.with(Column::Name, name.into())
    }

    pub fn genre(self, genre: Genre) -> Self {
        self.with(Column::Genre, genre)
    }

    pub fn platform(self, platform: Platform) -> Self {
        self.with(Column::Platform, platform)
    }

    pub fn price(self, price: f64) -> Self {
        self.with(Column::Price, price)
    }

    pub fn quantity(self, quantity: i64) -> Self {
        self.with(Column::Quantity, quantity)
    }

    pub fn supplier_name(self, name: impl Into<String>) -> Self {
        self.with(Column::SupplierName, name.into())
    }

    pub fn supplier_phone(self, phone: Option<String>) -> Self {
        self.with(Column::SupplierPhone, phone)
    }

    pub fn get(&self, column: Column) -> Option<&FieldValue> {
        self.values.get(&column)
    }

    pub fn contains(&self, column: Column) -> bool {
        self.values.contains_key(&column)
    }

    pub fn remove(&mut self, column: Column) -> Option<FieldValue> {
        self.values.remove(&column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Column, &FieldValue)> {
        self.values.iter().map(|(c, v)| (*c, v))
    }
}

impl From<&NewGame> for GameValues {
    fn from(game: &NewGame) -> Self {
        GameValues::new()
            .name(game.name.clone())
            .genre(game.genre)
            .platform(game.platform)
            .price(game.price)
            .quantity(game.quantity)
            .supplier_name(game.supplier_name.clone())
            .supplier_phone(game.supplier_phone.clone())
    }
}

impl From<NewGame> for GameValues {
    fn from(game: NewGame) -> Self {
        GameValues::from(&game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_table_order() {
        let values = GameValues::new()
            .supplier_name("2K")
            .quantity(3)
            .name("BioShock");
        let columns: Vec<Column> = values.iter().map(|(c, _)| c).collect();
        assert_eq!(
            columns,
            vec![Column::Name, Column::Quantity, Column::SupplierName]
        );
    }

    #[test]
    fn enums_store_their_codes() {
        let values = GameValues::new().genre(Genre::Rpg).platform(Platform::Ps4);
        assert_eq!(values.get(Column::Genre), Some(&FieldValue::Integer(3)));
        assert_eq!(values.get(Column::Platform), Some(&FieldValue::Integer(4)));
    }

    #[test]
    fn absent_phone_is_null() {
        let values = GameValues::from(NewGame::new("Halo 5", "Microsoft"));
        assert_eq!(values.len(), 7);
        assert_eq!(values.get(Column::SupplierPhone), Some(&FieldValue::Null));
    }
}
