//! # WildPark Use Case Layer
//!
//! Application-specific business rules.
//! Each use case runs one park operation and reports what happened through
//! the [`Reporter`](wildpark_domain::Reporter) it was built with.
//!
//! - [`FindSectorUseCase`] - lookup that always reports "search finished"
//! - [`ListStaffUseCase`] - staff roster, each member reporting for work
//! - [`CountAnimalsUseCase`] - total animal count
//! - [`SectorTourUseCase`] - list a sector, or make it sound off
//! - [`ExamineAnimalUseCase`] - find an animal anywhere and examine it

mod error;
mod examine;
mod find_sector;
mod list_staff;
mod sector_tour;
mod statistics;

pub use wildpark_domain;

pub use error::{Result, UseCaseError};
pub use examine::ExamineAnimalUseCase;
pub use find_sector::FindSectorUseCase;
pub use list_staff::ListStaffUseCase;
pub use sector_tour::SectorTourUseCase;
pub use statistics::CountAnimalsUseCase;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use wildpark_domain::{ParkEvent, Reporter};

    #[derive(Debug, Default)]
    pub(crate) struct RecordingReporter {
        events: Mutex<Vec<ParkEvent>>,
    }

    impl RecordingReporter {
        pub(crate) fn events(&self) -> Vec<ParkEvent> {
            self.events.lock().unwrap().clone()
        }

        pub(crate) fn lines(&self) -> Vec<String> {
            self.events().iter().map(|e| e.to_string()).collect()
        }
    }

    impl Reporter for RecordingReporter {
        fn report(&self, event: &ParkEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }
}
