//! # WildPark Domain Layer
//!
//! Animals, sectors, staff and the park registry that ties them together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - Park, Sector, Staff, Animal capabilities        ││
//! │  │  report/  - Reporter port + ParkEvent vocabulary            ││
//! │  │  service/ - Veterinarian, statistics                        ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate never prints.**
//!
//! Everything observable leaves through a [`Reporter`]. Whether that ends up
//! on a terminal, in a journal or in a test buffer is the adapter's call.

pub mod error;
pub mod model;
pub mod report;
pub mod service;

// Re-export commonly used types
pub use error::SectorNotFound;

pub use model::{
    animal::{create_animal, Animal, Cat, Dog, Family, Lion, Mammal, Species, WildAnimal},
    park::{FacilityKind, Park},
    sector::Sector,
    staff::Staff,
};

pub use report::{event::ParkEvent, reporter::NullReporter, reporter::Reporter};

pub use service::{
    statistics::{total_animals, ParkStatistics, SectorStatistics},
    veterinary::{Examination, Veterinarian},
};
