//! # tally-storage
//!
//! SQLite persistence for the tally attendance system: connection pool,
//! pragmas, migrations, and query modules behind the `StorageEngine`
//! façade implementing the core storage traits.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use tally_core::errors::StorageError;
use tally_core::TallyError;

/// Wrap a SQLite failure message in the storage error variant.
pub(crate) fn to_storage_err(message: impl Into<String>) -> TallyError {
    TallyError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
