//! # tally-ingest
//!
//! The event ingestion path: detection-line parsing, per-identifier
//! cooldown, the pipeline state machine, and the long-lived reader task
//! that drives it from a line transport.

pub mod cooldown;
pub mod parser;
pub mod pipeline;
pub mod reader;

pub use cooldown::CooldownTracker;
pub use pipeline::{IngestOutcome, IngestPipeline};
pub use reader::{open_device_transport, BufLineTransport, ILineTransport, IngestTask};
