//! The long-lived reader task: pulls lines from a transport and feeds
//! the pipeline for the process lifetime.
//!
//! The task is owned by the process lifecycle: it is started after the
//! stores are initialized and carries an explicit shutdown path for
//! clean test teardown. Transport failure never propagates — the task
//! logs, backs off, and retries; if the transport was never opened the
//! task is simply not spawned and the rest of the system keeps serving
//! queries.

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use tally_core::config::defaults::DEFAULT_READ_RETRY_MILLIS;
use tally_core::errors::IngestError;
use tally_core::traits::IDetectionSink;
use tracing::{info, warn};

use crate::pipeline::{IngestOutcome, IngestPipeline};

/// A line-oriented transport. `Ok(None)` means a read timeout or no
/// data yet; the reader loops and retries — it is not an error.
pub trait ILineTransport: Send {
    fn read_line(&mut self) -> Result<Option<String>, IngestError>;
}

/// Adapter over anything `BufRead` — a serial device file opened by the
/// bootstrap layer, a FIFO, or an in-memory cursor in tests.
pub struct BufLineTransport<R: BufRead> {
    reader: R,
}

impl<R: BufRead> BufLineTransport<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send> ILineTransport for BufLineTransport<R> {
    fn read_line(&mut self) -> Result<Option<String>, IngestError> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            // 0 bytes: nothing available right now (EOF on a plain file,
            // timeout on a device). Treated as "no line yet".
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(e)
                if e.kind() == std::io::ErrorKind::TimedOut
                    || e.kind() == std::io::ErrorKind::WouldBlock =>
            {
                Ok(None)
            }
            Err(e) => Err(IngestError::Read {
                message: e.to_string(),
            }),
        }
    }
}

/// Open a line transport over a serial device node (or any readable
/// path). The caller decides whether a failure here is fatal; the rest
/// of the system runs fine without a sensor attached.
pub fn open_device_transport(
    path: &std::path::Path,
) -> Result<BufLineTransport<std::io::BufReader<std::fs::File>>, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::TransportUnavailable {
        reason: format!("{}: {e}", path.display()),
    })?;
    Ok(BufLineTransport::new(std::io::BufReader::new(file)))
}

/// Pause between polls when the transport has no line ready.
const IDLE_POLL_MILLIS: u64 = 50;

/// Handle to the background ingestion task.
pub struct IngestTask {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl IngestTask {
    /// Spawn the reader thread. Call after the stores are initialized.
    pub fn spawn<T, S>(transport: T, pipeline: IngestPipeline<S>) -> Self
    where
        T: ILineTransport + 'static,
        S: IDetectionSink + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);
        let handle = std::thread::spawn(move || run_loop(transport, pipeline, &flag));
        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    /// Signal the task to stop and wait for it to finish.
    pub fn shutdown(mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Whether the reader thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for IngestTask {
    fn drop(&mut self) {
        // Signal without joining; `shutdown()` is the clean path.
        self.shutdown.store(true, Ordering::SeqCst);
    }
}

fn run_loop<T, S>(mut transport: T, mut pipeline: IngestPipeline<S>, shutdown: &AtomicBool)
where
    T: ILineTransport,
    S: IDetectionSink,
{
    info!(cooldown_secs = pipeline.cooldown_secs(), "ingest task started");
    while !shutdown.load(Ordering::SeqCst) {
        match transport.read_line() {
            Ok(Some(line)) => match pipeline.process_line(&line) {
                IngestOutcome::Recorded(record) => {
                    info!(
                        identifier = record.identifier,
                        name = %record.name,
                        group = %record.group,
                        timestamp = %record.timestamp,
                        "attendance recorded"
                    );
                }
                IngestOutcome::UnknownIdentifier { identifier } => {
                    // Sensor/roster mismatch: the one ingestion-side
                    // condition an operator needs to see.
                    warn!(identifier, "unknown identifier; register it in the roster");
                }
                // Malformed, sentinel, cooling-down, and store-failed
                // lines are dropped; store failures already logged.
                _ => {}
            },
            Ok(None) => {
                std::thread::sleep(Duration::from_millis(IDLE_POLL_MILLIS));
            }
            Err(e) => {
                warn!(error = %e, "transport read failed; retrying");
                std::thread::sleep(Duration::from_millis(DEFAULT_READ_RETRY_MILLIS));
            }
        }
    }
    info!("ingest task stopped");
}
