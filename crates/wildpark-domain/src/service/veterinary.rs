//! Veterinarian - Examines animals it does not own
//!
//! The association is transient: `examine` borrows the animal for the
//! duration of the call and keeps nothing afterwards.

use crate::model::animal::{Animal, Species};
use crate::report::event::ParkEvent;
use crate::report::reporter::Reporter;

/// Record of a single examination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examination {
    pub veterinarian: String,
    pub animal: String,
    pub species: Species,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Veterinarian {
    name: String,
}

impl Veterinarian {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Examine any animal through its capability interface
    pub fn examine(&self, animal: &dyn Animal, reporter: &dyn Reporter) -> Examination {
        reporter.report(&ParkEvent::Examination {
            veterinarian: self.name.clone(),
            animal: animal.name().to_string(),
        });

        Examination {
            veterinarian: self.name.clone(),
            animal: animal.name().to_string(),
            species: animal.species(),
        }
    }
}
