//! Statistics - Read-only aggregates over a park
//!
//! Nothing here mutates or caches; every call walks the current sectors.

use std::collections::BTreeMap;

use crate::model::animal::Species;
use crate::model::park::Park;

/// Total number of animals across every registered sector
pub fn total_animals(park: &Park) -> usize {
    park.sectors().iter().map(|s| s.animal_count()).sum()
}

/// Animal count of one sector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorStatistics {
    pub name: String,
    pub animals: usize,
}

/// Snapshot of a park's headline numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkStatistics {
    pub sectors: usize,
    pub staff: usize,
    pub total_animals: usize,
    /// One entry per sector, in registration order
    pub per_sector: Vec<SectorStatistics>,
    /// Species present in the park, in `Species` order
    pub per_species: Vec<(Species, usize)>,
}

impl ParkStatistics {
    pub fn collect(park: &Park) -> Self {
        let per_sector = park
            .sectors()
            .iter()
            .map(|s| SectorStatistics {
                name: s.name().to_string(),
                animals: s.animal_count(),
            })
            .collect();

        let mut species: BTreeMap<Species, usize> = BTreeMap::new();
        for animal in park.sectors().iter().flat_map(|s| s.animals()) {
            *species.entry(animal.species()).or_default() += 1;
        }

        Self {
            sectors: park.sector_count(),
            staff: park.staff_count(),
            total_animals: total_animals(park),
            per_sector,
            per_species: species.into_iter().collect(),
        }
    }

    /// Count for a single species (zero when absent)
    pub fn count_of(&self, species: Species) -> usize {
        self.per_species
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
