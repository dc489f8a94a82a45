//! The per-line ingestion state machine: parse → sentinel filter →
//! cooldown check → resolve → commit.
//!
//! Every branch except a successful commit discards the line; nothing
//! here returns an error to the caller, and nothing here can crash the
//! reader task. Lines are processed one at a time in arrival order.

use std::sync::Arc;

use chrono::{DateTime, Local};

use tally_core::constants::{SENTINEL_IDENTIFIER, TIMESTAMP_FORMAT};
use tally_core::models::AttendanceRecord;
use tally_core::traits::IDetectionSink;

use crate::cooldown::CooldownTracker;
use crate::parser::parse_detection;

/// What happened to one raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Committed: a record was appended and the cooldown advanced.
    Recorded(AttendanceRecord),
    /// Line did not match `FACE:<integer>`.
    Malformed,
    /// The reserved "no detection" identifier.
    Sentinel,
    /// Suppressed by the cooldown window.
    CoolingDown { identifier: i64 },
    /// Identifier not in the roster; diagnostic only.
    UnknownIdentifier { identifier: i64 },
    /// The store rejected the commit; absorbed, the line is dropped.
    StoreFailed { identifier: i64 },
}

/// Owns the cooldown tracker and drives the durable stores through the
/// detection sink. One pipeline instance per ingestion task.
pub struct IngestPipeline<S: IDetectionSink> {
    sink: Arc<S>,
    cooldown: CooldownTracker,
    cooldown_secs: u64,
}

impl<S: IDetectionSink> IngestPipeline<S> {
    pub fn new(sink: Arc<S>, cooldown_secs: u64) -> Self {
        Self {
            sink,
            cooldown: CooldownTracker::new(),
            cooldown_secs,
        }
    }

    /// Process one raw transport line at the current local time.
    pub fn process_line(&mut self, line: &str) -> IngestOutcome {
        self.process_line_at(line, Local::now())
    }

    /// Process one raw transport line at an explicit time (test seam).
    pub fn process_line_at(&mut self, line: &str, now: DateTime<Local>) -> IngestOutcome {
        let Some(identifier) = parse_detection(line) else {
            return IngestOutcome::Malformed;
        };
        if identifier == SENTINEL_IDENTIFIER {
            return IngestOutcome::Sentinel;
        }

        let now_epoch = now.timestamp().max(0) as u64;
        if !self
            .cooldown
            .should_accept(identifier, now_epoch, self.cooldown_secs)
        {
            return IngestOutcome::CoolingDown { identifier };
        }

        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        match self.sink.record_detection(identifier, &timestamp) {
            Ok(Some(record)) => {
                // The cooldown advances only on a committed record, so a
                // suppressed or unknown sighting never eats the window.
                self.cooldown.record_accepted(identifier, now_epoch);
                IngestOutcome::Recorded(record)
            }
            Ok(None) => IngestOutcome::UnknownIdentifier { identifier },
            Err(e) => {
                tracing::warn!(identifier, error = %e, "failed to commit detection");
                IngestOutcome::StoreFailed { identifier }
            }
        }
    }

    /// Configured cooldown duration in seconds.
    pub fn cooldown_secs(&self) -> u64 {
        self.cooldown_secs
    }

    /// The cooldown state (read-only, for diagnostics and tests).
    pub fn cooldown(&self) -> &CooldownTracker {
        &self.cooldown
    }
}
