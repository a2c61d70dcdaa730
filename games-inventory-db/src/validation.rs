//! Field checks applied before any write reaches the store.
//!
//! Checks always run in the order name, genre, platform, price, quantity,
//! supplier name; the first failure is reported.

use games_inventory_core::{Column, Genre, Platform};
use thiserror::Error;

use crate::values::{FieldValue, GameValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Game requires a name")]
    MissingName,
    #[error("Game requires a valid genre")]
    InvalidGenre,
    #[error("Game requires a valid platform")]
    InvalidPlatform,
    #[error("Game requires a valid price")]
    InvalidPrice,
    #[error("Game requires a valid quantity")]
    InvalidQuantity,
    #[error("Game requires a supplier name")]
    MissingSupplierName,
    #[error("Game id is assigned by the store and cannot be set")]
    ImmutableId,
}

impl ValidationError {
    /// The column whose value failed.
    pub fn field(&self) -> Column {
        match self {
            Self::MissingName => Column::Name,
            Self::InvalidGenre => Column::Genre,
            Self::InvalidPlatform => Column::Platform,
            Self::InvalidPrice => Column::Price,
            Self::InvalidQuantity => Column::Quantity,
            Self::MissingSupplierName => Column::SupplierName,
            Self::ImmutableId => Column::Id,
        }
    }
}

type Check = fn(&FieldValue) -> bool;

const CHECKS: &[(Column, Check, ValidationError)] = &[
    (Column::Name, non_empty_text, ValidationError::MissingName),
    (Column::Genre, known_genre, ValidationError::InvalidGenre),
    (Column::Platform, known_platform, ValidationError::InvalidPlatform),
    (Column::Price, non_negative_price, ValidationError::InvalidPrice),
    (Column::Quantity, non_negative_quantity, ValidationError::InvalidQuantity),
    (Column::SupplierName, non_empty_text, ValidationError::MissingSupplierName),
];

/// Validate a complete field set for insert. Every checked column must be present.
pub fn validate_new(values: &GameValues) -> Result<(), ValidationError> {
    for &(column, check, error) in CHECKS {
        match values.get(column) {
            Some(value) if check(value) => {}
            _ => return Err(error),
        }
    }
    reject_id(values)
}

/// Validate a partial field set for update. Absent columns are not checked.
pub fn validate_changes(values: &GameValues) -> Result<(), ValidationError> {
    for &(column, check, error) in CHECKS {
        if let Some(value) = values.get(column) {
            if !check(value) {
                return Err(error);
            }
        }
    }
    reject_id(values)
}

fn reject_id(values: &GameValues) -> Result<(), ValidationError> {
    if values.contains(Column::Id) {
        return Err(ValidationError::ImmutableId);
    }
    Ok(())
}

fn non_empty_text(value: &FieldValue) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

fn known_genre(value: &FieldValue) -> bool {
    value.as_i64().and_then(Genre::from_code).is_some()
}

fn known_platform(value: &FieldValue) -> bool {
    value.as_i64().and_then(Platform::from_code).is_some()
}

fn non_negative_price(value: &FieldValue) -> bool {
    value.as_f64().is_some_and(|p| p.is_finite() && p >= 0.0)
}

fn non_negative_quantity(value: &FieldValue) -> bool {
    value.as_i64().is_some_and(|q| q >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> GameValues {
        GameValues::new()
            .name("Diablo III")
            .genre(Genre::Rpg)
            .platform(Platform::Ps4)
            .price(19.99)
            .quantity(1)
            .supplier_name("Blizzard")
    }

    #[test]
    fn complete_set_passes() {
        assert_eq!(validate_new(&complete()), Ok(()));
    }

    #[test]
    fn phone_is_unconstrained() {
        let values = complete().supplier_phone(None);
        assert_eq!(validate_new(&values), Ok(()));
        let values = complete().with(Column::SupplierPhone, 42);
        assert_eq!(validate_new(&values), Ok(()));
    }

    #[test]
    fn each_missing_column_reports_its_error() {
        for &(column, _, error) in CHECKS {
            let mut values = complete();
            values.remove(column);
            assert_eq!(validate_new(&values), Err(error), "removed {}", column);
            assert_eq!(error.field(), column);
        }
    }

    #[test]
    fn first_violation_wins() {
        let values = GameValues::new()
            .with(Column::Genre, 9)
            .with(Column::Quantity, -1)
            .name("");
        assert_eq!(validate_new(&values), Err(ValidationError::MissingName));
        assert_eq!(validate_changes(&values), Err(ValidationError::MissingName));

        let values = complete().with(Column::Platform, 7).with(Column::Price, -0.5);
        assert_eq!(validate_new(&values), Err(ValidationError::InvalidPlatform));
    }

    #[test]
    fn out_of_set_codes_rejected() {
        for code in [-1, 6, 100] {
            let values = complete().with(Column::Genre, code);
            assert_eq!(validate_new(&values), Err(ValidationError::InvalidGenre));
        }
        let values = complete().with(Column::Platform, 5);
        assert_eq!(validate_new(&values), Err(ValidationError::InvalidPlatform));
    }

    #[test]
    fn price_rules() {
        assert_eq!(validate_new(&complete().price(0.0)), Ok(()));
        assert_eq!(validate_new(&complete().with(Column::Price, 20)), Ok(()));
        for bad in [-0.01, f64::NAN, f64::INFINITY] {
            assert_eq!(
                validate_new(&complete().price(bad)),
                Err(ValidationError::InvalidPrice)
            );
        }
        assert_eq!(
            validate_new(&complete().with(Column::Price, "cheap")),
            Err(ValidationError::InvalidPrice)
        );
    }

    #[test]
    fn null_values_fail_when_present() {
        let values = GameValues::new().with(Column::Quantity, FieldValue::Null);
        assert_eq!(validate_changes(&values), Err(ValidationError::InvalidQuantity));
        let values = GameValues::new().with(Column::Name, FieldValue::Null);
        assert_eq!(validate_changes(&values), Err(ValidationError::MissingName));
    }

    #[test]
    fn partial_sets_only_check_present_columns() {
        assert_eq!(validate_changes(&GameValues::new()), Ok(()));
        assert_eq!(validate_changes(&GameValues::new().quantity(0)), Ok(()));
        assert_eq!(
            validate_changes(&GameValues::new().quantity(-1)),
            Err(ValidationError::InvalidQuantity)
        );
    }

    #[test]
    fn id_cannot_be_written() {
        let values = complete().with(Column::Id, 5);
        assert_eq!(validate_new(&values), Err(ValidationError::ImmutableId));
        let values = GameValues::new().with(Column::Id, 5);
        assert_eq!(validate_changes(&values), Err(ValidationError::ImmutableId));
    }
}
