//! Reporter - Write-only sink for park events

use super::event::ParkEvent;

/// Reporter interface for dependency injection
///
/// This is a PORT in hexagonal architecture. Reporters take `&self` so the
/// same sink can be shared by every collaborator of a single operation.
pub trait Reporter: Send + Sync {
    fn report(&self, event: &ParkEvent);
}

/// No-op reporter
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: &ParkEvent) {}
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &ParkEvent) {
        (**self).report(event)
    }
}

impl<R: Reporter + ?Sized> Reporter for std::sync::Arc<R> {
    fn report(&self, event: &ParkEvent) {
        (**self).report(event)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&self, event: &ParkEvent) {
        (**self).report(event)
    }
}
