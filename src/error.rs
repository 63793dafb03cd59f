use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Table {0} already exists")]
    TableAlreadyExists(String),

    #[error("Table {0} does not exist")]
    TableNotFound(String),

    #[error("No columns defined for table {0}")]
    NoColumnsDefined(String),

    #[error("No values provided for insert into {0}")]
    NoValuesProvided(String),

    #[error("Database {0} already exists")]
    DatabaseAlreadyExists(String),

    #[error("Database {0} does not exist")]
    DatabaseNotFound(String),

    #[error("Malformed row: {0}")]
    MalformedRow(String),

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Invalid statement: {0}")]
    InvalidStatement(String),

    #[error("Column {column} does not exist in table {table}")]
    ColumnNotFound { table: String, column: String },

    #[error("Table {table} has {expected} columns but {actual} values were supplied")]
    ColumnCountMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },

    #[error("{0}")]
    Unknown(String),
}

impl EngineError {
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::TableAlreadyExists(_) => "TableAlreadyExistsError",
            EngineError::TableNotFound(_) => "TableNotFoundError",
            EngineError::NoColumnsDefined(_) => "NoColumnsDefinedError",
            EngineError::NoValuesProvided(_) => "NoValuesProvidedError",
            EngineError::DatabaseAlreadyExists(_) => "DatabaseAlreadyExistsError",
            EngineError::DatabaseNotFound(_) => "DatabaseNotFoundError",
            EngineError::MalformedRow(_) => "MalformedRowError",
            EngineError::UnsupportedOperator(_) => "UnsupportedOperatorError",
            EngineError::InvalidStatement(_) => "InvalidStatementError",
            EngineError::ColumnNotFound { .. } => "ColumnNotFoundError",
            EngineError::ColumnCountMismatch { .. } => "ColumnCountMismatchError",
            EngineError::Unknown(_) => "UnknownError",
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(error: io::Error) -> Self {
        EngineError::Unknown(error.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(error: serde_json::Error) -> Self {
        EngineError::InvalidStatement(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(
            "TableNotFoundError",
            EngineError::TableNotFound("users".to_string()).kind()
        );
        assert_eq!(
            "UnsupportedOperatorError",
            EngineError::UnsupportedOperator("LIKE".to_string()).kind()
        );
        assert_eq!("UnknownError", EngineError::Unknown("boom".to_string()).kind());
    }

    #[test]
    fn io_errors_become_unknown() {
        let error: EngineError = io::Error::other("disk on fire").into();
        assert_eq!("UnknownError", error.kind());
        assert_eq!("disk on fire", error.to_string());
    }

    #[test]
    fn messages_name_the_table() {
        assert_eq!(
            "Table users already exists",
            EngineError::TableAlreadyExists("users".to_string()).to_string()
        );
    }
}
