//! Domain Models - The vocabulary of WildPark
//!
//! Every name here should match how we talk about the park.

pub mod animal;
pub mod park;
pub mod sector;
pub mod staff;
