//! FanoutReporter - One event, several sinks

use wildpark_domain::{ParkEvent, Reporter};

#[derive(Default)]
pub struct FanoutReporter {
    reporters: Vec<Box<dyn Reporter>>,
}

impl FanoutReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a sink
    pub fn with(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporters.push(Box::new(reporter));
        self
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl Reporter for FanoutReporter {
    fn report(&self, event: &ParkEvent) {
        for reporter in &self.reporters {
            reporter.report(event);
        }
    }
}
