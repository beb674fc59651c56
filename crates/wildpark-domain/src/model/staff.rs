//! Staff - People who work at the park
//!
//! Staff members have a life of their own: the park only keeps
//! `Arc<Staff>` references, so creating or dropping one never needs a park.

use crate::report::event::ParkEvent;
use crate::report::reporter::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    name: String,
}

impl Staff {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Report this member working at `facility`
    pub fn work(&self, facility: &str, reporter: &dyn Reporter) {
        reporter.report(&ParkEvent::StaffWorking {
            staff: self.name.clone(),
            facility: facility.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::testing::RecordingReporter;

    #[test]
    fn test_standalone_staff() {
        // Never registered anywhere
        let staff = Staff::new("Carlos");
        assert_eq!(staff.name(), "Carlos");
        drop(staff);
    }

    #[test]
    fn test_work_line() {
        let reporter = RecordingReporter::new();
        Staff::new("Carlos").work("zoo", &reporter);

        assert_eq!(reporter.lines(), vec!["Carlos is working at the zoo."]);
    }
}
