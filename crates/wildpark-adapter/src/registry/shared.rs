//! SharedPark - A cloneable, lock-protected park handle
//!
//! Clones share the same park. `SharedPark::global()` hands out the one
//! process-wide park, created on first access and never torn down.
//! Prefer building a `SharedPark::new(..)` and passing it around; the
//! global handle exists for callers that cannot thread one through.

use std::sync::{Arc, OnceLock, RwLock};

use tracing::info;
use wildpark_domain::{total_animals, Animal, Park, Sector, Staff};
use wildpark_shared::{ParkError, Result};

static GLOBAL_PARK: OnceLock<SharedPark> = OnceLock::new();

/// Lifecycle of the process-wide park
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// `global()` has not been called yet
    Uninitialized,
    /// The global park exists for the rest of the process
    Active,
}

/// Thread-safe park handle using RwLock
#[derive(Debug, Clone, Default)]
pub struct SharedPark {
    inner: Arc<RwLock<Park>>,
}

impl SharedPark {
    pub fn new(park: Park) -> Self {
        Self {
            inner: Arc::new(RwLock::new(park)),
        }
    }

    /// The process-wide park, created on first call
    pub fn global() -> SharedPark {
        GLOBAL_PARK
            .get_or_init(|| {
                info!("creating process-wide park");
                SharedPark::default()
            })
            .clone()
    }

    pub fn state() -> RegistryState {
        if GLOBAL_PARK.get().is_some() {
            RegistryState::Active
        } else {
            RegistryState::Uninitialized
        }
    }

    /// Whether two handles point at the same park
    pub fn ptr_eq(&self, other: &SharedPark) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ========== Access ==========

    pub fn read<T>(&self, f: impl FnOnce(&Park) -> T) -> Result<T> {
        let park = self.inner.read().map_err(|_| ParkError::LockPoisoned)?;
        Ok(f(&park))
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut Park) -> T) -> Result<T> {
        let mut park = self.inner.write().map_err(|_| ParkError::LockPoisoned)?;
        Ok(f(&mut park))
    }

    // ========== Registration ==========

    pub fn add_sector(&self, sector: Sector) -> Result<()> {
        self.write(|park| park.add_sector(sector))
    }

    pub fn add_staff(&self, staff: Arc<Staff>) -> Result<()> {
        self.write(|park| park.add_staff(staff))
    }

    /// Add an animal to the first sector called `sector`
    pub fn add_animal(&self, sector: &str, animal: Box<dyn Animal>) -> Result<()> {
        self.write(|park| {
            park.find_sector_mut(sector)
                .map(|s| s.add_animal(animal))
                .map_err(ParkError::from)
        })?
    }

    // ========== Queries ==========

    pub fn has_sector(&self, name: &str) -> Result<bool> {
        self.read(|park| park.find_sector(name).is_ok())
    }

    pub fn sector_count(&self) -> Result<usize> {
        self.read(|park| park.sector_count())
    }

    pub fn staff_count(&self) -> Result<usize> {
        self.read(|park| park.staff_count())
    }

    pub fn total_animals(&self) -> Result<usize> {
        self.read(total_animals)
    }
}

impl From<Park> for SharedPark {
    fn from(park: Park) -> Self {
        Self::new(park)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildpark_domain::{Dog, Lion};

    #[test]
    fn test_clones_share_state() {
        let park = SharedPark::new(Park::default());
        let other = park.clone();

        park.add_sector(Sector::new("Mammals")).unwrap();

        assert!(park.ptr_eq(&other));
        assert_eq!(other.sector_count().unwrap(), 1);
    }

    #[test]
    fn test_independent_parks() {
        let a = SharedPark::default();
        let b = SharedPark::default();

        a.add_sector(Sector::new("Mammals")).unwrap();

        assert!(!a.ptr_eq(&b));
        assert_eq!(b.sector_count().unwrap(), 0);
    }

    #[test]
    fn test_global_is_single_instance() {
        let first = SharedPark::global();
        let second = SharedPark::global();

        assert!(first.ptr_eq(&second));
        assert_eq!(SharedPark::state(), RegistryState::Active);

        // Unique name: other tests in this binary may share the global park
        first
            .add_sector(Sector::new("global-identity-check"))
            .unwrap();
        assert!(second.has_sector("global-identity-check").unwrap());
    }

    #[test]
    fn test_mammals_and_birds_scenario() {
        let park = SharedPark::default();
        park.add_sector(Sector::new("Mammals")).unwrap();
        park.add_sector(Sector::new("Birds")).unwrap();
        park.add_animal("Mammals", Box::new(Dog::new("Rex"))).unwrap();
        park.add_animal("Birds", Box::new(Lion::new("Odd", 1))).unwrap();

        assert_eq!(park.total_animals().unwrap(), 2);
        assert!(park.has_sector("Birds").unwrap());
        assert!(!park.has_sector("Reptiles").unwrap());
    }

    #[test]
    fn test_add_animal_to_missing_sector() {
        let park = SharedPark::default();
        let err = park
            .add_animal("Reptiles", Box::new(Dog::new("Rex")))
            .unwrap_err();

        assert!(matches!(err, ParkError::SectorNotFound(_)));
        assert_eq!(park.total_animals().unwrap(), 0);
    }

    #[test]
    fn test_concurrent_registration() {
        let park = SharedPark::default();
        park.add_sector(Sector::new("Kennel")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let park = park.clone();
                std::thread::spawn(move || {
                    park.add_animal("Kennel", Box::new(Dog::new(format!("Dog {}", i))))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(park.total_animals().unwrap(), 8);
    }

    #[test]
    fn test_staff_registered_through_handle() {
        let park = SharedPark::from(Park::default());
        let carlos = Arc::new(Staff::new("Carlos"));

        park.add_staff(Arc::clone(&carlos)).unwrap();

        assert_eq!(park.staff_count().unwrap(), 1);
        assert_eq!(Arc::strong_count(&carlos), 2);
    }
}
