//! Error handling for dishmenu-store
//!
//! Wraps dishmenu-core DmError with store-specific helpers

use dishmenu_core::errors::{DmError, DmErrorKind};

/// Result type alias using DmError
pub type Result<T> = std::result::Result<T, DmError>;

/// Operation recorded on raw driver errors
pub const SQLITE_OP: &str = "sqlite";

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> DmError {
    DmError::new(DmErrorKind::Migration)
        .with_op("migration")
        .with_entity_id(migration_id)
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> DmError {
    DmError::new(DmErrorKind::Migration)
        .with_op("migration_checksum")
        .with_entity_id(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> DmError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DmErrorKind::ConstraintViolation
        }
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::CannotOpen =>
        {
            DmErrorKind::ConnectionUnavailable
        }
        _ => DmErrorKind::Persistence,
    };
    DmError::new(kind)
        .with_op(SQLITE_OP)
        .with_message(err.to_string())
}
