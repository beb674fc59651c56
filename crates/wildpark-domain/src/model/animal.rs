//! Animal - The capability set every resident of the park supports
//!
//! Callers only ever see `dyn Animal`. The name is part of the capability
//! surface, so nothing downstream has to recover the concrete species to
//! talk about an animal.

use crate::report::event::ParkEvent;
use crate::report::reporter::Reporter;

/// The species the park knows how to house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Dog,
    Lion,
    Cat,
}

/// Broad classification of a species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Domestic mammals (nurse their young)
    Mammal,
    /// Wild animals (have a natural habitat)
    Wild,
}

impl Species {
    /// Get the display name of this species
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Lion => "Lion",
            Species::Cat => "Cat",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Species::Dog | Species::Cat => Family::Mammal,
            Species::Lion => Family::Wild,
        }
    }

    /// Get all species (useful for iteration)
    pub fn all() -> &'static [Species] {
        &[Species::Dog, Species::Lion, Species::Cat]
    }
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Capability set shared by every animal
pub trait Animal: core::fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn species(&self) -> Species;

    /// The line this animal's sound renders to
    fn sound(&self) -> String;

    /// The line this animal's movement renders to
    fn movement(&self) -> String;

    fn produce_sound(&self, reporter: &dyn Reporter) {
        reporter.report(&ParkEvent::AnimalSound {
            animal: self.name().to_string(),
            line: self.sound(),
        });
    }

    /// Repeat the sound `times` times; zero is a no-op
    fn produce_sound_times(&self, times: usize, reporter: &dyn Reporter) {
        for _ in 0..times {
            self.produce_sound(reporter);
        }
    }

    fn move_around(&self, reporter: &dyn Reporter) {
        reporter.report(&ParkEvent::AnimalMoved {
            animal: self.name().to_string(),
            line: self.movement(),
        });
    }
}

/// Extra behavior of mammals
pub trait Mammal: Animal {
    fn breathe(&self) -> String {
        format!("{} is breathing.", self.name())
    }

    fn nurse(&self) -> String;
}

/// Extra behavior of wild animals
pub trait WildAnimal: Animal {
    fn age(&self) -> u32;

    fn breathe(&self) -> String {
        format!("{} is breathing.", self.name())
    }

    fn habitat(&self) -> String;
}

// ========== Species ==========

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn species(&self) -> Species {
        Species::Dog
    }

    fn sound(&self) -> String {
        format!("{} barks: Woof Woof!", self.name)
    }

    fn movement(&self) -> String {
        format!("{} is running!", self.name)
    }
}

impl Mammal for Dog {
    fn nurse(&self) -> String {
        format!("{} nurses its pups.", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lion {
    name: String,
    age: u32,
}

impl Lion {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Animal for Lion {
    fn name(&self) -> &str {
        &self.name
    }

    fn species(&self) -> Species {
        Species::Lion
    }

    fn sound(&self) -> String {
        format!("{} roars: ROOOARR!", self.name)
    }

    fn movement(&self) -> String {
        format!("{} is running across the savanna!", self.name)
    }
}

impl WildAnimal for Lion {
    fn age(&self) -> u32 {
        self.age
    }

    fn habitat(&self) -> String {
        format!("{} lives in savanna regions.", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn species(&self) -> Species {
        Species::Cat
    }

    fn sound(&self) -> String {
        format!("{} meows: Meow!", self.name)
    }

    fn movement(&self) -> String {
        format!("{} is prowling!", self.name)
    }
}

impl Mammal for Cat {
    fn nurse(&self) -> String {
        format!("{} nurses its kittens.", self.name)
    }
}

/// Build an animal of the given species
///
/// `age` only matters for wild animals and defaults to zero.
pub fn create_animal(
    species: Species,
    name: impl Into<String>,
    age: Option<u32>,
) -> Box<dyn Animal> {
    match species {
        Species::Dog => Box::new(Dog::new(name)),
        Species::Lion => Box::new(Lion::new(name, age.unwrap_or(0))),
        Species::Cat => Box::new(Cat::new(name)),
    }
}
