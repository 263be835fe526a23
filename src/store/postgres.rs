//! PostgreSQL boundary: translate sqlx errors into the closed store
//! outcome set. Store implementations bind with `?` and never match on
//! driver codes themselves.

use super::StoreError;
use sqlx::error::ErrorKind;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::UniqueViolation => StoreError::UniqueViolation,
                ErrorKind::ForeignKeyViolation => StoreError::ForeignKeyViolation,
                _ => StoreError::Other(err.to_string()),
            },
            _ => StoreError::Other(err.to_string()),
        }
    }
}
