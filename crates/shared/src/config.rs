//! Configuration types for WildPark
//!
//! A park can be described in JSON or YAML and turned into a populated
//! [`Park`]. The file extension picks the format.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wildpark_domain::{create_animal, FacilityKind, Park, Sector, Species, Staff, Veterinarian};

use crate::error::{ParkError, Result};

/// Facility kind as written in configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacilityKindConfig {
    Zoo,
    #[default]
    WildlifePark,
}

impl From<FacilityKindConfig> for FacilityKind {
    fn from(kind: FacilityKindConfig) -> Self {
        match kind {
            FacilityKindConfig::Zoo => FacilityKind::Zoo,
            FacilityKindConfig::WildlifePark => FacilityKind::WildlifePark,
        }
    }
}

/// Species as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeciesConfig {
    Dog,
    Lion,
    Cat,
}

impl From<SpeciesConfig> for Species {
    fn from(species: SpeciesConfig) -> Self {
        match species {
            SpeciesConfig::Dog => Species::Dog,
            SpeciesConfig::Lion => Species::Lion,
            SpeciesConfig::Cat => Species::Cat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalConfig {
    pub species: SpeciesConfig,
    pub name: String,
    /// Only meaningful for wild animals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorConfig {
    pub name: String,
    #[serde(default)]
    pub animals: Vec<AnimalConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffConfig {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeterinarianConfig {
    pub name: String,
}

/// Park configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkConfig {
    pub name: String,

    #[serde(default)]
    pub kind: FacilityKindConfig,

    #[serde(default)]
    pub sectors: Vec<SectorConfig>,

    #[serde(default)]
    pub staff: Vec<StaffConfig>,

    #[serde(default)]
    pub veterinarians: Vec<VeterinarianConfig>,
}

impl ParkConfig {
    /// Load configuration from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let config = match extension.as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            _ => {
                return Err(ParkError::Config(format!(
                    "unsupported config format: {}",
                    path.display()
                )))
            }
        };

        debug!(path = %path.display(), park = %config.name, "loaded park config");
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// The walkthrough park: one savanna with Simba, Carlos on staff, Dr. Ana on call
    pub fn demo() -> Self {
        Self {
            name: "Wild Park".to_string(),
            kind: FacilityKindConfig::WildlifePark,
            sectors: vec![SectorConfig {
                name: "Savanna".to_string(),
                animals: vec![AnimalConfig {
                    species: SpeciesConfig::Lion,
                    name: "Simba".to_string(),
                    age: Some(5),
                }],
            }],
            staff: vec![StaffConfig {
                name: "Carlos".to_string(),
            }],
            veterinarians: vec![VeterinarianConfig {
                name: "Dr. Ana".to_string(),
            }],
        }
    }

    /// Reject blank names anywhere in the file
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ParkError::Config("park name must not be empty".to_string()));
        }
        for sector in &self.sectors {
            if sector.name.trim().is_empty() {
                return Err(ParkError::Config("sector name must not be empty".to_string()));
            }
            if sector.animals.iter().any(|a| a.name.trim().is_empty()) {
                return Err(ParkError::Config(format!(
                    "animal name must not be empty (sector '{}')",
                    sector.name
                )));
            }
        }
        if self.staff.iter().any(|s| s.name.trim().is_empty()) {
            return Err(ParkError::Config("staff name must not be empty".to_string()));
        }
        if self.veterinarians.iter().any(|v| v.name.trim().is_empty()) {
            return Err(ParkError::Config(
                "veterinarian name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and build the park described by this config
    pub fn build_park(&self) -> Result<Park> {
        let mut park = Park::new(self.name.clone(), self.kind.into());
        self.populate(&mut park)?;
        Ok(park)
    }

    /// Validate, then append this config's sectors and staff to `park`
    pub fn populate(&self, park: &mut Park) -> Result<()> {
        self.validate()?;

        for sector_config in &self.sectors {
            let mut sector = Sector::new(sector_config.name.clone());
            for animal in &sector_config.animals {
                sector.add_animal(create_animal(
                    animal.species.into(),
                    animal.name.clone(),
                    animal.age,
                ));
            }
            park.add_sector(sector);
        }
        for member in &self.staff {
            park.add_staff(Arc::new(Staff::new(member.name.clone())));
        }
        Ok(())
    }

    pub fn build_veterinarians(&self) -> Vec<Veterinarian> {
        self.veterinarians
            .iter()
            .map(|v| Veterinarian::new(v.name.clone()))
            .collect()
    }
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self::demo()
    }
}
