//! Sector - A named group of animals owned by the park
//!
//! A sector owns its animals outright and only ever grows; there is no
//! removal path. Listing and making noise are separate operations.

use tracing::debug;

use super::animal::Animal;
use crate::report::event::ParkEvent;
use crate::report::reporter::Reporter;

#[derive(Debug)]
pub struct Sector {
    /// Display name, also the lookup key
    name: String,
    /// Animals in insertion order
    animals: Vec<Box<dyn Animal>>,
}

impl Sector {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            animals: Vec::new(),
        }
    }

    /// Builder: add an animal
    pub fn with_animal(mut self, animal: impl Animal + 'static) -> Self {
        self.add_animal(Box::new(animal));
        self
    }

    pub fn add_animal(&mut self, animal: Box<dyn Animal>) {
        debug!(sector = %self.name, animal = %animal.name(), "animal added");
        self.animals.push(animal);
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn animals(&self) -> &[Box<dyn Animal>] {
        &self.animals
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn animal_names(&self) -> Vec<&str> {
        self.animals.iter().map(|a| a.name()).collect()
    }

    /// First animal with the given name
    pub fn find_animal(&self, name: &str) -> Option<&dyn Animal> {
        self.animals
            .iter()
            .find(|a| a.name() == name)
            .map(|a| &**a)
    }

    // ========== Reporting ==========

    /// Report a header and one line per animal, without triggering behavior
    ///
    /// An empty sector still reports its header; `trigger_sounds` is the
    /// operation that does nothing on an empty sector.
    pub fn list_animals(&self, reporter: &dyn Reporter) {
        reporter.report(&ParkEvent::SectorListing {
            sector: self.name.clone(),
            animals: self.animals.len(),
        });
        for animal in &self.animals {
            reporter.report(&ParkEvent::AnimalListed {
                sector: self.name.clone(),
                animal: animal.name().to_string(),
                species: animal.species(),
            });
        }
    }

    /// Make every animal produce its sound, in insertion order
    pub fn trigger_sounds(&self, reporter: &dyn Reporter) {
        for animal in &self.animals {
            animal.produce_sound(reporter);
        }
    }
}
