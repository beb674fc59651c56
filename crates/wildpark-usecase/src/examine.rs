//! ExamineAnimalUseCase - Find an animal by name and have a vet examine it

use tracing::debug;
use wildpark_domain::{Examination, Park, Reporter, Veterinarian};

use crate::error::{Result, UseCaseError};

pub struct ExamineAnimalUseCase<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> ExamineAnimalUseCase<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Examine the first animal called `animal`, searching sectors in order
    pub fn execute(&self, park: &Park, vet: &Veterinarian, animal: &str) -> Result<Examination> {
        let found = park
            .sectors()
            .iter()
            .find_map(|s| s.find_animal(animal))
            .ok_or_else(|| UseCaseError::AnimalNotFound {
                name: animal.to_string(),
            })?;

        debug!(veterinarian = %vet.name(), animal = %animal, "examining");
        Ok(vet.examine(found, self.reporter))
    }
}
