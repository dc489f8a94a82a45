use crate::errors::TallyResult;
use crate::models::AttendanceRecord;

/// The ingestion pipeline's single entry point into the durable stores.
pub trait IDetectionSink: Send + Sync {
    /// Resolve `identifier` against the roster and, if known, append an
    /// attendance record stamped with `timestamp`. Lookup and append run
    /// inside one critical section so a concurrent roster edit cannot
    /// interleave. Returns `None` for an unknown identifier.
    fn record_detection(
        &self,
        identifier: i64,
        timestamp: &str,
    ) -> TallyResult<Option<AttendanceRecord>>;
}
