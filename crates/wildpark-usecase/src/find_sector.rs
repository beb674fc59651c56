//! FindSectorUseCase - Sector lookup with a guaranteed "search finished"
//!
//! The outcome is reported first (found / not found), then the finish
//! notification fires from a drop guard, so it runs on every exit path.
//! A failed lookup is returned to the caller, never escalated.

use tracing::debug;
use wildpark_domain::{Park, ParkEvent, Reporter, Sector, SectorNotFound};

/// Emits `SearchFinished` when dropped
struct SearchFinished<'a> {
    name: &'a str,
    reporter: &'a dyn Reporter,
}

impl Drop for SearchFinished<'_> {
    fn drop(&mut self) {
        self.reporter.report(&ParkEvent::SearchFinished {
            name: self.name.to_string(),
        });
    }
}

pub struct FindSectorUseCase<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> FindSectorUseCase<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self { reporter }
    }

    pub fn execute<'p>(&self, park: &'p Park, name: &str) -> Result<&'p Sector, SectorNotFound> {
        let _finished = SearchFinished {
            name,
            reporter: self.reporter,
        };
        debug!(sector = %name, "searching sector");

        match park.find_sector(name) {
            Ok(sector) => {
                self.reporter.report(&ParkEvent::SectorFound {
                    name: sector.name().to_string(),
                });
                Ok(sector)
            }
            Err(err) => {
                self.reporter.report(&ParkEvent::SectorNotFound {
                    name: err.name.clone(),
                });
                Err(err)
            }
        }
    }
}
