//! Result rows returned by gateway queries.

use games_inventory_core::{Column, Game, Genre, Platform};
use thiserror::Error;

use crate::values::FieldValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("Column '{0}' is not in the row")]
    Missing(Column),
    #[error("Column '{column}' holds an unexpected value: {value:?}")]
    Invalid { column: Column, value: FieldValue },
}

/// One result row: the projected columns and their values, in projection order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<(Column, FieldValue)>,
}

impl Row {
    pub(crate) fn read(row: &rusqlite::Row<'_>, projection: &[Column]) -> rusqlite::Result<Self> {
        let mut values = Vec::with_capacity(projection.len());
        for (i, &column) in projection.iter().enumerate() {
            values.push((column, FieldValue::from_sql(row.get_ref(i)?)));
        }
        Ok(Self { values })
    }

    pub fn get(&self, column: Column) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }

    pub fn id(&self) -> Option<i64> {
        self.get(Column::Id).and_then(FieldValue::as_i64)
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.values.iter().map(|(c, _)| *c)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Decode a full-projection row into a [`Game`].
    pub fn to_game(&self) -> Result<Game, RowError> {
        Ok(Game {
            id: self.decode(Column::Id, FieldValue::as_i64)?,
            name: self.text(Column::Name)?,
            genre: self.decode(Column::Genre, |v| v.as_i64().and_then(Genre::from_code))?,
            platform: self.decode(Column::Platform, |v| {
                v.as_i64().and_then(Platform::from_code)
            })?,
            price: self.decode(Column::Price, FieldValue::as_f64)?,
            quantity: self.decode(Column::Quantity, FieldValue::as_i64)?,
            supplier_name: self.text(Column::SupplierName)?,
            supplier_phone: match self.require(Column::SupplierPhone)? {
                FieldValue::Null => None,
                value => Some(
                    value
                        .as_str()
                        .ok_or_else(|| invalid(Column::SupplierPhone, value))?
                        .to_string(),
                ),
            },
        })
    }

    fn require(&self, column: Column) -> Result<&FieldValue, RowError> {
        self.get(column).ok_or(RowError::Missing(column))
    }

    fn decode<T>(
        &self,
        column: Column,
        f: impl FnOnce(&FieldValue) -> Option<T>,
    ) -> Result<T, RowError> {
        let value = self.require(column)?;
        f(value).ok_or_else(|| invalid(column, value))
    }

    fn text(&self, column: Column) -> Result<String, RowError> {
        self.decode(column, |v| v.as_str().map(str::to_string))
    }
}

fn invalid(column: Column, value: &FieldValue) -> RowError {
    RowError::Invalid {
        column,
        value: value.clone(),
    }
}
