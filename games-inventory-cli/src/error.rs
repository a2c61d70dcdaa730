use games_inventory_db::{GatewayError, SchemaError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Database could not be opened or a statement failed
    #[error("Database error: {0}")]
    Database(String),

    /// A field value was rejected before writing
    #[error("Invalid {field}: {message}")]
    Invalid { field: String, message: String },

    /// No game with the requested id
    #[error("No game with id {0}")]
    NotFound(i64),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<GatewayError> for CliError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::Validation(v) => Self::Invalid {
                field: v.field().to_string(),
                message: v.to_string(),
            },
            other => Self::database(other.to_string()),
        }
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::database(format!("Failed to open inventory database: {}", e))
    }
}
