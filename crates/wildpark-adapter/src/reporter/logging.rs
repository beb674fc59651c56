//! TracingReporter - Park events as structured log records

use tracing::{info, warn};
use wildpark_domain::{ParkEvent, Reporter};

/// Forwards every event to `tracing`; failures go out at WARN
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &ParkEvent) {
        if event.is_failure() {
            warn!(kind = event.kind(), "{}", event);
        } else {
            info!(kind = event.kind(), "{}", event);
        }
    }
}
