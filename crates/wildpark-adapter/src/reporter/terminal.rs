//! ConsoleReporter - Human-readable lines on stdout

use console::{style, Term};
use wildpark_domain::{ParkEvent, Reporter};

/// Prints one line per event, styled by kind
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    term: Term,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn render(event: &ParkEvent) -> String {
        let line = event.to_string();
        match event {
            ParkEvent::SectorNotFound { .. } => style(line).red().to_string(),
            ParkEvent::SectorFound { .. } => style(line).green().to_string(),
            ParkEvent::SearchFinished { .. } => style(line).dim().to_string(),
            // Headers get a blank line above them
            ParkEvent::SectorListing { .. } | ParkEvent::StaffListing { .. } => {
                format!("\n{}", style(line).bold())
            }
            ParkEvent::TotalAnimals { .. } => style(line).cyan().to_string(),
            _ => line,
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: &ParkEvent) {
        if let Err(err) = self.term.write_line(&Self::render(event)) {
            tracing::warn!(error = %err, "failed to write to stdout");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_text() {
        console::set_colors_enabled(false);

        let line = ConsoleReporter::render(&ParkEvent::SectorFound {
            name: "Birds".to_string(),
        });
        assert_eq!(line, "Sector found: Birds");

        let header = ConsoleReporter::render(&ParkEvent::StaffListing {
            facility: "zoo".to_string(),
        });
        assert_eq!(header, "\n📌 Staff of the zoo:");
    }
}
