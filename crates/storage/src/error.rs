//! Storage error types

use thiserror::Error;

/// Storage errors, split by the operation that failed
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not reach or authenticate to the database
    #[error("database connection failed: {0}")]
    Connection(String),

    /// Schema or table creation failed
    #[error("schema creation failed: {0}")]
    Schema(String),

    /// A row violated a column type or length constraint
    #[error("constraint violation: {0}")]
    Constraint(String),
}

/// Map a row-level sqlx failure onto the storage taxonomy
///
/// Errors reported by the server itself (bad numeric text after
/// sanitization, oversized values) are constraint violations; anything
/// else means the session died under us.
pub(crate) fn classify_row_error(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::Database(db) => StorageError::Constraint(db.message().to_string()),
        other => StorageError::Connection(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_map_to_connection() {
        let err = classify_row_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Connection(_)));
    }

    #[test]
    fn test_error_messages_name_the_operation() {
        assert!(StorageError::Connection("refused".into())
            .to_string()
            .starts_with("database connection failed"));
        assert!(StorageError::Schema("denied".into())
            .to_string()
            .starts_with("schema creation failed"));
        assert!(StorageError::Constraint("bad decimal".into())
            .to_string()
            .starts_with("constraint violation"));
    }
}
