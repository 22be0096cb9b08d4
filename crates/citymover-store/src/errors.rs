//! Error handling for citymover-store
//!
//! Wraps the core `ExError` with rusqlite and filesystem helpers

use citymover_core::errors::{CityMoverError, ExError, ExErrorKind};
use rusqlite::ffi;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Same as `from_rusqlite`, tagged with the failing operation
pub fn sqlite_error(op: &str, err: rusqlite::Error) -> ExError {
    from_rusqlite(err).with_op(op)
}

/// Create an IO error
pub fn io_error(op: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(op)
        .with_message(err.to_string())
}

/// Username already registered
pub fn duplicate_username(op: &str, username: &str) -> ExError {
    ExError::from(CityMoverError::DuplicateUsername {
        username: username.to_string(),
    })
    .with_op(op)
}

/// A row references a user or city that does not exist
pub fn missing_reference(op: &str, message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op(op)
        .with_message(message)
}

fn has_extended_code(err: &rusqlite::Error, code: std::os::raw::c_int) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.extended_code == code)
}

/// UNIQUE constraint failed
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    has_extended_code(err, ffi::SQLITE_CONSTRAINT_UNIQUE)
}

/// FOREIGN KEY constraint failed
pub fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    has_extended_code(err, ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_detected() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();
        let err = conn
            .execute("INSERT INTO t VALUES ('a')", [])
            .unwrap_err();
        assert!(is_unique_violation(&err));
        assert!(!is_foreign_key_violation(&err));
    }

    #[test]
    fn test_from_rusqlite_is_persistence() {
        let err = sqlite_error("get_cities", rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("get_cities"));
    }
}
