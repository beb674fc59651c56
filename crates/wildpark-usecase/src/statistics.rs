//! CountAnimalsUseCase - Report the park's animal total

use wildpark_domain::{total_animals, Park, ParkEvent, Reporter};

pub struct CountAnimalsUseCase<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> CountAnimalsUseCase<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self { reporter }
    }

    pub fn execute(&self, park: &Park) -> usize {
        let total = total_animals(park);
        self.reporter.report(&ParkEvent::TotalAnimals {
            facility: park.kind().display_name().to_string(),
            total,
        });
        total
    }
}
