//! Error types for WildPark

use thiserror::Error;
use wildpark_domain::SectorNotFound;

/// General WildPark error type
#[derive(Debug, Error)]
pub enum ParkError {
    #[error(transparent)]
    SectorNotFound(#[from] SectorNotFound),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Park registry lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ParkError>;
