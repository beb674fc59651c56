//! # WildPark Adapter Layer
//!
//! Infrastructure around the domain (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `registry/` - Thread-safe shared park handle and the process-wide instance
//! - `reporter/` - Reporter implementations (console, tracing, memory, journal)

pub mod registry;
pub mod reporter;

pub use registry::shared::{RegistryState, SharedPark};
pub use reporter::terminal::ConsoleReporter;
pub use reporter::fanout::FanoutReporter;
pub use reporter::journal::{EventJournal, JournalEntry, JournalStats};
pub use reporter::memory::MemoryReporter;
pub use reporter::logging::TracingReporter;
