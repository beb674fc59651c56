//! Error types for park use cases

use thiserror::Error;
use wildpark_domain::SectorNotFound;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    SectorNotFound(#[from] SectorNotFound),

    #[error("Animal '{name}' not found in any sector")]
    AnimalNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, UseCaseError>;
