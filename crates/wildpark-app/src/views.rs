//! JSON views of park state for `--json` output

use serde::Serialize;
use wildpark_domain::{Animal, Park, ParkStatistics, Sector};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalView {
    pub name: String,
    pub species: String,
}

impl AnimalView {
    pub fn from_animal(animal: &dyn Animal) -> Self {
        Self {
            name: animal.name().to_string(),
            species: animal.species().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorView {
    pub name: String,
    pub animals: Vec<AnimalView>,
}

impl SectorView {
    pub fn from_sector(sector: &Sector) -> Self {
        Self {
            name: sector.name().to_string(),
            animals: sector
                .animals()
                .iter()
                .map(|a| AnimalView::from_animal(&**a))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupView {
    pub sector: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<SectorView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesCountView {
    pub species: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorCountView {
    pub name: String,
    pub animals: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsView {
    pub park: String,
    pub kind: String,
    pub sectors: usize,
    pub staff: usize,
    pub total_animals: usize,
    pub per_sector: Vec<SectorCountView>,
    pub per_species: Vec<SpeciesCountView>,
}

impl StatsView {
    pub fn from_park(park: &Park) -> Self {
        let stats = ParkStatistics::collect(park);
        Self {
            park: park.name().to_string(),
            kind: park.kind().to_string(),
            sectors: stats.sectors,
            staff: stats.staff,
            total_animals: stats.total_animals,
            per_sector: stats
                .per_sector
                .into_iter()
                .map(|s| SectorCountView {
                    name: s.name,
                    animals: s.animals,
                })
                .collect(),
            per_species: stats
                .per_species
                .into_iter()
                .map(|(species, count)| SpeciesCountView {
                    species: species.to_string(),
                    count,
                })
                .collect(),
        }
    }
}
