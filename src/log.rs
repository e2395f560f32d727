//! Warning sink for records dropped during decoding.
//!
//! The sink is passed into the decoder instead of being a process-wide
//! singleton, so decoding stays pure and tests can capture output without
//! installing a global subscriber. Sink failures are not the decoder's
//! concern and must never influence decode results.

/// Receives warning messages for dropped records: oversized room
/// identifiers, oversized user identifiers and presence events that failed
/// to decode.
pub trait DecodeLog {
    fn warn(&self, message: &str);
}

/// Forwards decode warnings to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DecodeLog for TracingLog {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "mtx_sync", "{message}");
    }
}
