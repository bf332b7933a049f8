use rusqlite::ErrorCode;
use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds of the record-keeping core.
///
/// Every operation reports what actually went wrong rather than a bare
/// boolean, so callers can tell a duplicate key apart from an unreachable
/// store and react (or test) accordingly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open database at {path}")]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("no live database connection")]
    Disconnected,

    #[error("{entity} '{key}' already exists")]
    Duplicate { entity: &'static str, key: String },

    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("unknown caller '{0}': no client or VIP client with that name")]
    UnknownCaller(String),

    #[error("database error")]
    Storage(#[from] rusqlite::Error),

    #[error("backup failed")]
    Backup(#[source] std::io::Error),

    #[error("restore failed")]
    Restore(#[source] std::io::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Classifies an insert failure: a PRIMARY KEY collision becomes
    /// `Duplicate`, anything else stays a storage error.
    pub fn on_insert(err: rusqlite::Error, entity: &'static str, key: &str) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => StoreError::Duplicate {
                entity,
                key: key.to_string(),
            },
            _ => StoreError::Storage(err),
        }
    }
}
