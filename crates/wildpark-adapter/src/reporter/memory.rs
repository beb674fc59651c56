//! MemoryReporter - Keeps every event in memory
//!
//! Useful for testing and for callers that want to render output later.

use std::sync::{Arc, Mutex};

use wildpark_domain::{ParkEvent, Reporter};

/// Clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    events: Arc<Mutex<Vec<ParkEvent>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ParkEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rendered lines, in report order
    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(|e| e.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: &ParkEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let reporter = MemoryReporter::new();
        reporter.report(&ParkEvent::SectorFound {
            name: "Birds".to_string(),
        });
        reporter.report(&ParkEvent::SearchFinished {
            name: "Birds".to_string(),
        });

        assert_eq!(reporter.len(), 2);
        assert_eq!(reporter.lines(), vec!["Sector found: Birds", "Search finished."]);
    }

    #[test]
    fn test_clones_share_buffer() {
        let reporter = MemoryReporter::new();
        let clone = reporter.clone();

        clone.report(&ParkEvent::TotalAnimals {
            facility: "zoo".to_string(),
            total: 0,
        });
        assert_eq!(reporter.len(), 1);

        reporter.clear();
        assert!(clone.is_empty());
    }
}
