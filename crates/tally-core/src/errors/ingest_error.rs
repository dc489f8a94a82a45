/// Ingestion-side failures. None of these is fatal: an unavailable
/// transport leaves the pipeline dormant while the query surface keeps
/// serving, and read failures are retried by the reader task.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("sensor transport unavailable: {reason}")]
    TransportUnavailable { reason: String },

    #[error("transport read failed: {message}")]
    Read { message: String },
}
