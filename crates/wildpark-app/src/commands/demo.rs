//! wildpark demo
//!
//! Walks through every park operation against the process-wide park:
//! examination, listings, sounds, staff roll call, a lookup that may fail,
//! a repeated sound and the animal count.
//!
//! The config populates the global park on the first run only; later runs
//! in the same process walk through the park as it already is.

use clap::Args;
use serde_json::Value;
use tracing::info;
use wildpark_adapter::SharedPark;
use wildpark_domain::Reporter;
use wildpark_shared::ParkConfig;
use wildpark_usecase::{
    CountAnimalsUseCase, ExamineAnimalUseCase, FindSectorUseCase, ListStaffUseCase,
    SectorTourUseCase,
};

use crate::views::StatsView;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Sector to look up during the walkthrough
    #[arg(short, long, default_value = "Birds")]
    pub search: String,

    /// How many times the first sector sounds off at the end
    #[arg(short, long, default_value_t = 3)]
    pub times: usize,
}

impl DemoCommand {
    pub fn run(&self, config: &ParkConfig, reporter: &dyn Reporter) -> anyhow::Result<Value> {
        let park = SharedPark::global();
        let populated = park.write(|p| {
            if p.sector_count() == 0 {
                config.populate(p).map(|_| true)
            } else {
                Ok(false)
            }
        })??;
        if populated {
            info!(park = %config.name, "global park populated");
        }

        let vets = config.build_veterinarians();

        park.read(|p| -> anyhow::Result<Value> {
            let first_animal = p
                .sectors()
                .iter()
                .flat_map(|s| s.animal_names())
                .next()
                .map(str::to_string);
            if let (Some(vet), Some(animal)) = (vets.first(), first_animal) {
                ExamineAnimalUseCase::new(reporter).execute(p, vet, &animal)?;
            }

            let tour = SectorTourUseCase::new(reporter);
            tour.list_all(p);
            for sector in p.sectors() {
                sector.trigger_sounds(reporter);
            }

            ListStaffUseCase::new(reporter).execute(p);

            // Not finding the sector is part of the walkthrough
            let _ = FindSectorUseCase::new(reporter).execute(p, &self.search);

            if let Some(sector) = p.sectors().first() {
                tour.sound_off(p, sector.name(), self.times)?;
            }

            CountAnimalsUseCase::new(reporter).execute(p);

            Ok(serde_json::to_value(StatsView::from_park(p))?)
        })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildpark_adapter::MemoryReporter;

    #[test]
    fn test_demo_walkthrough() {
        let reporter = MemoryReporter::new();
        let cmd = DemoCommand {
            search: "Birds".to_string(),
            times: 3,
        };

        let output = cmd.run(&ParkConfig::demo(), &reporter).unwrap();
        let lines = reporter.lines();

        assert_eq!(lines[0], "🔍 Dr. Ana is examining Simba");
        assert!(lines.contains(&"Error: sector 'Birds' not found!".to_string()));
        assert!(lines.contains(&"Carlos is working at the wildlife park.".to_string()));
        assert!(lines
            .last()
            .unwrap()
            .starts_with("📊 Total animals in the wildlife park:"));
        assert_eq!(output["totalAnimals"], 1);
        assert_eq!(SharedPark::state(), wildpark_adapter::RegistryState::Active);

        let again = cmd.run(&ParkConfig::demo(), &MemoryReporter::new()).unwrap();
        assert_eq!(again["totalAnimals"], 1);
        assert_eq!(again["sectors"], 1);
    }
}
