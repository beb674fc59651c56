//! Reporter wiring for the CLI
//!
//! Every command reports through one `FanoutReporter`: the primary sink
//! (console or tracing) plus, when `--journal` is given, an `EventJournal`
//! whose entries are appended to the command output.

use std::sync::Arc;

use serde_json::{json, Value};
use wildpark_adapter::{ConsoleReporter, EventJournal, FanoutReporter, TracingReporter};
use wildpark_domain::Reporter;

/// Sinks for one CLI run
pub struct Sinks {
    pub reporter: FanoutReporter,
    pub journal: Option<Arc<EventJournal>>,
}

impl Sinks {
    /// `--json` swaps the console for the log; `journal` is the entry cap
    pub fn new(json: bool, journal: Option<usize>) -> Self {
        let primary: Box<dyn Reporter> = if json {
            Box::new(TracingReporter)
        } else {
            Box::new(ConsoleReporter::new())
        };
        Self::with_primary(primary, journal)
    }

    pub fn with_primary(primary: impl Reporter + 'static, journal: Option<usize>) -> Self {
        let journal = journal.map(|max| Arc::new(EventJournal::new(max)));
        let mut reporter = FanoutReporter::new().with(primary);
        if let Some(journal) = &journal {
            reporter = reporter.with(Arc::clone(journal));
        }
        Self { reporter, journal }
    }

    /// Attach the journal export and its failure count to a command output
    pub fn attach_journal(&self, output: Value) -> Value {
        let Some(journal) = &self.journal else {
            return output;
        };
        let stats = journal.stats();
        json!({
            "result": output,
            "journal": {
                "entries": journal.export_json(),
                "totalEntries": stats.total_entries,
                "failureCount": stats.failure_count,
            },
        })
    }
}
