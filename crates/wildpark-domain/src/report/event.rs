//! ParkEvent - Everything the park can say about itself
//!
//! Events are plain values. The `Display` impl is the human-readable line a
//! console sink prints; structured sinks use the fields directly.

use crate::model::animal::Species;

/// Events emitted by park operations
///
/// Operations never format output themselves - they hand one of these
/// to a [`Reporter`](super::reporter::Reporter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkEvent {
    /// A sector lookup matched
    SectorFound {
        name: String,
    },
    /// A sector lookup exhausted every sector
    SectorNotFound {
        name: String,
    },
    /// Emitted after every sector lookup, whatever the outcome
    SearchFinished {
        name: String,
    },
    /// Header preceding a sector's animal listing
    SectorListing {
        sector: String,
        animals: usize,
    },
    /// One animal in a sector listing
    AnimalListed {
        sector: String,
        animal: String,
        species: Species,
    },
    /// An animal produced its sound
    AnimalSound {
        animal: String,
        line: String,
    },
    /// An animal moved
    AnimalMoved {
        animal: String,
        line: String,
    },
    /// Header preceding the staff roster
    StaffListing {
        facility: String,
    },
    /// A staff member is at work
    StaffWorking {
        staff: String,
        facility: String,
    },
    /// A veterinarian examined an animal
    Examination {
        veterinarian: String,
        animal: String,
    },
    /// Result of the animal count
    TotalAnimals {
        facility: String,
        total: usize,
    },
}

impl ParkEvent {
    /// Short machine-friendly name of the event
    pub fn kind(&self) -> &'static str {
        match self {
            ParkEvent::SectorFound { .. } => "sector_found",
            ParkEvent::SectorNotFound { .. } => "sector_not_found",
            ParkEvent::SearchFinished { .. } => "search_finished",
            ParkEvent::SectorListing { .. } => "sector_listing",
            ParkEvent::AnimalListed { .. } => "animal_listed",
            ParkEvent::AnimalSound { .. } => "animal_sound",
            ParkEvent::AnimalMoved { .. } => "animal_moved",
            ParkEvent::StaffListing { .. } => "staff_listing",
            ParkEvent::StaffWorking { .. } => "staff_working",
            ParkEvent::Examination { .. } => "examination",
            ParkEvent::TotalAnimals { .. } => "total_animals",
        }
    }

    /// Whether this event reports a failed operation
    pub fn is_failure(&self) -> bool {
        matches!(self, ParkEvent::SectorNotFound { .. })
    }
}

impl core::fmt::Display for ParkEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParkEvent::SectorFound { name } => write!(f, "Sector found: {}", name),
            ParkEvent::SectorNotFound { name } => {
                write!(f, "Error: sector '{}' not found!", name)
            }
            ParkEvent::SearchFinished { .. } => write!(f, "Search finished."),
            ParkEvent::SectorListing { sector, .. } => {
                write!(f, "📌 Animals in sector {}:", sector)
            }
            ParkEvent::AnimalListed {
                animal, species, ..
            } => write!(f, "  - {} ({})", animal, species),
            ParkEvent::AnimalSound { line, .. } | ParkEvent::AnimalMoved { line, .. } => {
                write!(f, "{}", line)
            }
            ParkEvent::StaffListing { facility } => write!(f, "📌 Staff of the {}:", facility),
            ParkEvent::StaffWorking { staff, facility } => {
                write!(f, "{} is working at the {}.", staff, facility)
            }
            ParkEvent::Examination {
                veterinarian,
                animal,
            } => write!(f, "🔍 {} is examining {}", veterinarian, animal),
            ParkEvent::TotalAnimals { facility, total } => {
                write!(f, "📊 Total animals in the {}: {}", facility, total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_lines() {
        let found = ParkEvent::SectorFound {
            name: "Birds".to_string(),
        };
        let missing = ParkEvent::SectorNotFound {
            name: "Reptiles".to_string(),
        };
        let finished = ParkEvent::SearchFinished {
            name: "Reptiles".to_string(),
        };

        assert_eq!(found.to_string(), "Sector found: Birds");
        assert_eq!(missing.to_string(), "Error: sector 'Reptiles' not found!");
        assert_eq!(finished.to_string(), "Search finished.");
    }

    #[test]
    fn test_failure_classification() {
        let missing = ParkEvent::SectorNotFound {
            name: "Reptiles".to_string(),
        };
        assert!(missing.is_failure());
        assert_eq!(missing.kind(), "sector_not_found");

        let total = ParkEvent::TotalAnimals {
            facility: "zoo".to_string(),
            total: 2,
        };
        assert!(!total.is_failure());
        assert_eq!(total.to_string(), "📊 Total animals in the zoo: 2");
    }

    #[test]
    fn test_animal_listed_shows_species() {
        let event = ParkEvent::AnimalListed {
            sector: "Savanna".to_string(),
            animal: "Simba".to_string(),
            species: Species::Lion,
        };
        assert_eq!(event.to_string(), "  - Simba (Lion)");
    }
}
