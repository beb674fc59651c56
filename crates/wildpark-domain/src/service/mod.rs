//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Services operate on entities they do not own.

pub mod statistics;
pub mod veterinary;
