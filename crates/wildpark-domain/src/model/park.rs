//! Park - The registry of sectors and staff
//!
//! Park is the aggregate root. It owns its sectors (and through them the
//! animals) and keeps shared references to staff who exist independently.
//!
//! A park is an ordinary value: build one, pass it by reference to whoever
//! needs it. The process-wide shared instance lives in the adapter layer.

use std::sync::Arc;

use tracing::{debug, warn};

use super::sector::Sector;
use super::staff::Staff;
use crate::error::SectorNotFound;

/// What sort of facility the park is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FacilityKind {
    Zoo,
    #[default]
    WildlifePark,
}

impl FacilityKind {
    /// Lower-case label used in sentences ("working at the zoo")
    pub fn display_name(&self) -> &'static str {
        match self {
            FacilityKind::Zoo => "zoo",
            FacilityKind::WildlifePark => "wildlife park",
        }
    }
}

impl core::fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Park - sectors and staff, in insertion order
///
/// Sector names are not required to be unique; lookups return the
/// first match.
#[derive(Debug)]
pub struct Park {
    name: String,
    kind: FacilityKind,
    sectors: Vec<Sector>,
    staff: Vec<Arc<Staff>>,
}

impl Park {
    pub fn new(name: impl Into<String>, kind: FacilityKind) -> Self {
        Self {
            name: name.into(),
            kind,
            sectors: Vec::new(),
            staff: Vec::new(),
        }
    }

    // ========== Registration ==========

    pub fn add_sector(&mut self, sector: Sector) {
        debug!(park = %self.name, sector = %sector.name(), "sector added");
        self.sectors.push(sector);
    }

    pub fn add_staff(&mut self, staff: Arc<Staff>) {
        debug!(park = %self.name, staff = %staff.name(), "staff added");
        self.staff.push(staff);
    }

    // ========== Lookup ==========

    /// First sector whose name equals `name`
    pub fn find_sector(&self, name: &str) -> Result<&Sector, SectorNotFound> {
        self.sectors
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| {
                warn!(park = %self.name, sector = %name, "sector lookup failed");
                SectorNotFound::new(name)
            })
    }

    /// Mutable counterpart of [`Park::find_sector`]
    pub fn find_sector_mut(&mut self, name: &str) -> Result<&mut Sector, SectorNotFound> {
        self.sectors
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| SectorNotFound::new(name))
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FacilityKind {
        self.kind
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn sector_names(&self) -> Vec<&str> {
        self.sectors.iter().map(|s| s.name()).collect()
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// All registered staff, in registration order
    pub fn list_staff(&self) -> &[Arc<Staff>] {
        &self.staff
    }

    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }
}

impl Default for Park {
    fn default() -> Self {
        Self::new("Wild Park", FacilityKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::animal::{Dog, Lion};

    #[test]
    fn test_park_creation() {
        let park = Park::new("City Zoo", FacilityKind::Zoo);

        assert_eq!(park.name(), "City Zoo");
        assert_eq!(park.kind(), FacilityKind::Zoo);
        assert_eq!(park.sector_count(), 0);
        assert_eq!(park.staff_count(), 0);
    }

    #[test]
    fn test_find_sector_by_name() {
        let mut park = Park::default();
        park.add_sector(Sector::new("Mammals"));
        park.add_sector(Sector::new("Birds"));

        let found = park.find_sector("Birds").unwrap();
        assert_eq!(found.name(), "Birds");

        let err = park.find_sector("Reptiles").unwrap_err();
        assert_eq!(err, SectorNotFound::new("Reptiles"));
    }

    #[test]
    fn test_find_sector_returns_first_match() {
        let mut park = Park::default();
        park.add_sector(Sector::new("Savanna").with_animal(Lion::new("Simba", 5)));
        park.add_sector(Sector::new("Savanna"));

        let found = park.find_sector("Savanna").unwrap();
        assert_eq!(found.animal_count(), 1);
        assert_eq!(park.sector_count(), 2);
    }

    #[test]
    fn test_lookup_failure_does_not_poison_park() {
        let mut park = Park::default();
        assert!(park.find_sector("Birds").is_err());

        park.add_sector(Sector::new("Birds"));
        assert!(park.find_sector("Birds").is_ok());
    }

    #[test]
    fn test_find_sector_mut_adds_animals() {
        let mut park = Park::default();
        park.add_sector(Sector::new("Kennel"));

        park.find_sector_mut("Kennel")
            .unwrap()
            .add_animal(Box::new(Dog::new("Rex")));

        assert_eq!(park.find_sector("Kennel").unwrap().animal_count(), 1);
        assert!(park.find_sector_mut("Aviary").is_err());
    }

    #[test]
    fn test_insertion_order() {
        let mut park = Park::default();
        park.add_sector(Sector::new("B"));
        park.add_sector(Sector::new("A"));
        park.add_staff(Arc::new(Staff::new("Zoe")));
        park.add_staff(Arc::new(Staff::new("Ana")));

        assert_eq!(park.sector_names(), vec!["B", "A"]);
        let names: Vec<_> = park.list_staff().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Zoe", "Ana"]);
    }

    #[test]
    fn test_staff_outlives_park() {
        let carlos = Arc::new(Staff::new("Carlos"));
        {
            let mut park = Park::default();
            park.add_staff(Arc::clone(&carlos));
            assert_eq!(Arc::strong_count(&carlos), 2);
        }
        assert_eq!(Arc::strong_count(&carlos), 1);
        assert_eq!(carlos.name(), "Carlos");
    }
}
