//! SectorTourUseCase - Look inside a sector
//!
//! Listing and sounding off are separate entry points: listing never makes
//! an animal do anything.

use wildpark_domain::{Park, Reporter};

use crate::error::Result;
use crate::find_sector::FindSectorUseCase;

pub struct SectorTourUseCase<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> SectorTourUseCase<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self { reporter }
    }

    /// List the animals of one sector; returns how many were listed
    pub fn list(&self, park: &Park, sector: &str) -> Result<usize> {
        let sector = FindSectorUseCase::new(self.reporter).execute(park, sector)?;
        sector.list_animals(self.reporter);
        Ok(sector.animal_count())
    }

    /// List every sector in registration order
    pub fn list_all(&self, park: &Park) -> usize {
        park.sectors()
            .iter()
            .map(|sector| {
                sector.list_animals(self.reporter);
                sector.animal_count()
            })
            .sum()
    }

    /// Have every animal of one sector produce its sound `times` times
    pub fn sound_off(&self, park: &Park, sector: &str, times: usize) -> Result<usize> {
        let sector = FindSectorUseCase::new(self.reporter).execute(park, sector)?;
        for animal in sector.animals() {
            animal.produce_sound_times(times, self.reporter);
        }
        Ok(sector.animal_count() * times)
    }
}
