//! Reporting Port - How the domain tells the outside world what happened
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait Reporter        │  ConsoleReporter
//!   fn report()         │  TracingReporter
//!                       │  EventJournal
//! ```

pub mod event;
pub mod reporter;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::event::ParkEvent;
    use super::reporter::Reporter;

    /// Collects events so tests can assert on them
    #[derive(Debug, Default)]
    pub(crate) struct RecordingReporter {
        events: Mutex<Vec<ParkEvent>>,
    }

    impl RecordingReporter {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn events(&self) -> Vec<ParkEvent> {
            self.events.lock().unwrap().clone()
        }

        pub(crate) fn lines(&self) -> Vec<String> {
            self.events().iter().map(|e| e.to_string()).collect()
        }
    }

    impl Reporter for RecordingReporter {
        fn report(&self, event: &ParkEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }
}
