//! Statement builders.
//!
//! Each gateway call builds one of these value objects (table, projection,
//! predicate, order) and renders it to SQL with positional parameters.
//! Column names only ever come from [`Column`].
//!
//! ```
//! use games_inventory_core::{Column, TABLE_NAME};
//! use games_inventory_db::{Filter, OrderBy, Select};
//!
//! let (sql, params) = Select::new(TABLE_NAME)
//!     .columns(&[Column::Id, Column::Name])
//!     .filter(Filter::all().greater_than(Column::Quantity, 0))
//!     .order_by(&[OrderBy::asc(Column::Name)])
//!     .to_sql();
//! assert_eq!(sql, "SELECT _id, name FROM games WHERE quantity > ?1 ORDER BY name ASC");
//! assert_eq!(params.len(), 1);
//! ```

use games_inventory_core::Column;

use crate::values::{FieldValue, GameValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl Comparison {
    fn operator(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Like => "LIKE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub column: Column,
    pub comparison: Comparison,
    pub value: FieldValue,
}

/// Conditions joined with `AND`. An empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    /// Matches every row.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches the single row with this id.
    pub fn by_id(id: i64) -> Self {
        Self::all().equals(Column::Id, id)
    }

    pub fn and(
        mut self,
        column: Column,
        comparison: Comparison,
        value: impl Into<FieldValue>,
    ) -> Self {
        self.conditions.push(Condition {
            column,
            comparison,
            value: value.into(),
        });
        self
    }

    /// Equality; against `Null` this becomes `IS NULL`.
    pub fn equals(self, column: Column, value: impl Into<FieldValue>) -> Self {
        self.and(column, Comparison::Eq, value)
    }

    /// Inequality; against `Null` this becomes `IS NOT NULL`.
    pub fn not_equals(self, column: Column, value: impl Into<FieldValue>) -> Self {
        self.and(column, Comparison::Ne, value)
    }

    pub fn less_than(self, column: Column, value: impl Into<FieldValue>) -> Self {
        self.and(column, Comparison::Lt, value)
    }

    pub fn greater_than(self, column: Column, value: impl Into<FieldValue>) -> Self {
        self.and(column, Comparison::Gt, value)
    }

    pub fn like(self, column: Column, pattern: impl Into<String>) -> Self {
        self.and(column, Comparison::Like, pattern.into())
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Render the `WHERE` body, appending bound values to `params`.
    fn render(&self, params: &mut Vec<FieldValue>) -> Option<String> {
        if self.conditions.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .conditions
            .iter()
            .map(|c| match (c.comparison, &c.value) {
                (Comparison::Eq, FieldValue::Null) => format!("{} IS NULL", c.column),
                (Comparison::Ne, FieldValue::Null) => format!("{} IS NOT NULL", c.column),
                (comparison, value) => {
                    params.push(value.clone());
                    format!("{} {} ?{}", c.column, comparison.operator(), params.len())
                }
            })
            .collect();
        Some(parts.join(" AND "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: Column,
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(column: Column) -> Self {
        Self {
            column,
            direction: Direction::Asc,
        }
    }

    pub fn desc(column: Column) -> Self {
        Self {
            column,
            direction: Direction::Desc,
        }
    }
}

fn push_where(sql: &mut String, predicate: &Filter, params: &mut Vec<FieldValue>) {
    if let Some(clause) = predicate.render(params) {
        sql.push_str(" WHERE ");
        sql.push_str(&clause);
    }
}

fn join_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(Column::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SELECT` over one table. An empty projection selects every column.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    table: &'static str,
    projection: Vec<Column>,
    predicate: Filter,
    order: Vec<OrderBy>,
}

impl Select {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            projection: Vec::new(),
            predicate: Filter::all(),
            order: Vec::new(),
        }
    }

    pub fn columns(mut self, projection: &[Column]) -> Self {
        self.projection = projection.to_vec();
        self
    }

    pub fn filter(mut self, predicate: Filter) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn order_by(mut self, order: &[OrderBy]) -> Self {
        self.order = order.to_vec();
        self
    }

    /// The columns each result row will carry, in order.
    pub fn projection(&self) -> &[Column] {
        if self.projection.is_empty() {
            Column::all()
        } else {
            &self.projection
        }
    }

    pub fn to_sql(&self) -> (String, Vec<FieldValue>) {
        let mut params = Vec::new();
        let mut sql = format!(
            "SELECT {} FROM {}",
            join_columns(self.projection()),
            self.table
        );
        push_where(&mut sql, &self.predicate, &mut params);
        if !self.order.is_empty() {
            let order: Vec<String> = self
                .order
                .iter()
                .map(|o| match o.direction {
                    Direction::Asc => format!("{} ASC", o.column),
                    Direction::Desc => format!("{} DESC", o.column),
                })
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&order.join(", "));
        }
        (sql, params)
    }
}

/// `INSERT` of one row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert<'a> {
    table: &'static str,
    values: &'a GameValues,
}

impl<'a> Insert<'a> {
    pub fn new(table: &'static str, values: &'a GameValues) -> Self {
        Self { table, values }
    }

    pub fn to_sql(&self) -> (String, Vec<FieldValue>) {
        if self.values.is_empty() {
            return (format!("INSERT INTO {} DEFAULT VALUES", self.table), Vec::new());
        }
        let columns: Vec<Column> = self.values.iter().map(|(c, _)| c).collect();
        let params: Vec<FieldValue> = self.values.iter().map(|(_, v)| v.clone()).collect();
        let placeholders: Vec<String> = (1..=params.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            join_columns(&columns),
            placeholders.join(", ")
        );
        (sql, params)
    }
}

/// `UPDATE` of the rows matching a predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Update<'a> {
    table: &'static str,
    assignments: &'a GameValues,
    predicate: Filter,
}

impl<'a> Update<'a> {
    pub fn new(table: &'static str, assignments: &'a GameValues, predicate: Filter) -> Self {
        Self {
            table,
            assignments,
            predicate,
        }
    }

    pub fn to_sql(&self) -> (String, Vec<FieldValue>) {
        let mut params = Vec::new();
        let sets: Vec<String> = self
            .assignments
            .iter()
            .map(|(column, value)| {
                params.push(value.clone());
                format!("{} = ?{}", column, params.len())
            })
            .collect();
        let mut sql = format!("UPDATE {} SET {}", self.table, sets.join(", "));
        push_where(&mut sql, &self.predicate, &mut params);
        (sql, params)
    }
}

/// `DELETE` of the rows matching a predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    table: &'static str,
    predicate: Filter,
}

impl Delete {
    pub fn new(table: &'static str, predicate: Filter) -> Self {
        Self { table, predicate }
    }

    pub fn to_sql(&self) -> (String, Vec<FieldValue>) {
        let mut params = Vec::new();
        let mut sql = format!("DELETE FROM {}", self.table);
        push_where(&mut sql, &self.predicate, &mut params);
        (sql, params)
    }
}
