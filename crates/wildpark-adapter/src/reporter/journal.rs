//! EventJournal - Bounded, timestamped record of park events

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use wildpark_domain::{ParkEvent, Reporter};

/// Journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub timestamp: String,
    pub kind: String,
    pub message: String,
    pub failure: bool,
}

impl JournalEntry {
    fn from_event(event: &ParkEvent) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            kind: event.kind().to_string(),
            message: event.to_string(),
            failure: event.is_failure(),
        }
    }
}

/// Journal statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalStats {
    pub total_entries: usize,
    pub failure_count: usize,
}

/// Keeps the most recent `max_entries` events; the oldest are dropped first
#[derive(Debug)]
pub struct EventJournal {
    entries: Mutex<VecDeque<JournalEntry>>,
    max_entries: usize,
}

impl EventJournal {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(max_entries)),
            max_entries,
        }
    }

    pub fn record(&self, entry: JournalEntry) {
        if self.max_entries == 0 {
            return;
        }
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Most recent entries first
    pub fn recent(&self, limit: usize) -> Vec<JournalEntry> {
        self.snapshot().into_iter().rev().take(limit).collect()
    }

    /// Most recent failures first
    pub fn recent_failures(&self, limit: usize) -> Vec<JournalEntry> {
        self.snapshot()
            .into_iter()
            .rev()
            .filter(|e| e.failure)
            .take(limit)
            .collect()
    }

    pub fn stats(&self) -> JournalStats {
        let entries = self.snapshot();
        JournalStats {
            total_entries: entries.len(),
            failure_count: entries.iter().filter(|e| e.failure).count(),
        }
    }

    /// Export as JSON, oldest entry first
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }

    fn snapshot(&self) -> Vec<JournalEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .cloned()
            .collect()
    }
}

impl Default for EventJournal {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Reporter for EventJournal {
    fn report(&self, event: &ParkEvent) {
        self.record(JournalEntry::from_event(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_failure(name: &str) -> ParkEvent {
        ParkEvent::SectorNotFound {
            name: name.to_string(),
        }
    }

    fn finished(name: &str) -> ParkEvent {
        ParkEvent::SearchFinished {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_record_event() {
        let journal = EventJournal::new(100);

        journal.report(&finished("Birds"));

        let stats = journal.stats();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.failure_count, 0);
        assert_eq!(journal.recent(1)[0].kind, "search_finished");
    }

    #[test]
    fn test_record_failure() {
        let journal = EventJournal::new(100);

        journal.report(&lookup_failure("Reptiles"));
        journal.report(&finished("Reptiles"));

        assert_eq!(journal.stats().failure_count, 1);
        let failures = journal.recent_failures(10);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message, "Error: sector 'Reptiles' not found!");
    }

    #[test]
    fn test_max_entries_limit() {
        let journal = EventJournal::new(3);

        for name in ["a", "b", "c", "d"] {
            journal.report(&finished(name));
        }
        journal.report(&lookup_failure("e"));

        assert_eq!(journal.stats().total_entries, 3);
        // Oldest entries should be removed
        let recent = journal.recent(10);
        assert_eq!(recent[0].kind, "sector_not_found");
        assert_eq!(recent.len(), 3);
    }

    #[test]
    fn test_zero_capacity() {
        let journal = EventJournal::new(0);
        journal.report(&finished("Birds"));
        assert_eq!(journal.stats().total_entries, 0);
    }

    #[test]
    fn test_export_json() {
        let journal = EventJournal::default();
        journal.report(&lookup_failure("Reptiles"));

        let json = journal.export_json();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["kind"], "sector_not_found");
        assert_eq!(entries[0]["failure"], true);
        assert!(entries[0]["timestamp"].is_string());
    }
}
