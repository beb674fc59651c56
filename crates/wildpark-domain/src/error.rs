//! Domain errors
//!
//! The only failure the registry knows about is a lookup that comes back empty.

use thiserror::Error;

/// Raised when no registered sector carries the requested name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Sector '{name}' not found")]
pub struct SectorNotFound {
    pub name: String,
}

impl SectorNotFound {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = SectorNotFound::new("Reptiles");
        assert_eq!(err.to_string(), "Sector 'Reptiles' not found");
        assert_eq!(err.name, "Reptiles");
    }
}
