//! Error taxonomy for the tally workspace.
//!
//! Administrative rejections (`RosterError`) surface one level to the
//! caller; ingestion-side conditions are absorbed inside the pipeline
//! and never reach here as errors.

pub mod ingest_error;
pub mod roster_error;
pub mod storage_error;

pub use ingest_error::IngestError;
pub use roster_error::RosterError;
pub use storage_error::StorageError;

/// Top-level error type. Wraps the per-concern enums so a single
/// `TallyResult` flows through every crate boundary.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("invalid config: {message}")]
    Config { message: String },
}

pub type TallyResult<T> = Result<T, TallyError>;

impl TallyError {
    /// The roster rejection inside this error, if that is what it is.
    pub fn as_roster(&self) -> Option<&RosterError> {
        match self {
            TallyError::Roster(e) => Some(e),
            _ => None,
        }
    }
}
