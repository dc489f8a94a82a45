//! Tracing subscriber setup. Opt-in: the bootstrap layer (or a test)
//! calls this once; library code only emits events.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: compact fmt output filtered by
/// `RUST_LOG`, defaulting to `info`. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
