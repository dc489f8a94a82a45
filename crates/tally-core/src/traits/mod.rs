//! Trait seams between the storage engine and its consumers.

pub mod sink;
pub mod storage;

pub use sink::IDetectionSink;
pub use storage::{IAttendanceLog, IRosterStore};
