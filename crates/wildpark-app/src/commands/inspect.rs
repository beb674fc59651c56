//! wildpark find / animals / sounds / examine

use anyhow::anyhow;
use clap::Args;
use serde_json::{json, Value};
use wildpark_domain::{Park, Reporter, Veterinarian};
use wildpark_shared::ParkConfig;
use wildpark_usecase::{ExamineAnimalUseCase, FindSectorUseCase, SectorTourUseCase, UseCaseError};

use crate::views::{LookupView, SectorView};

#[derive(Debug, Args)]
pub struct FindCommand {
    /// Sector name
    pub sector: String,
}

impl FindCommand {
    /// A missing sector is reported, not treated as a failure
    pub fn run(&self, park: &Park, reporter: &dyn Reporter) -> anyhow::Result<Value> {
        let view = match FindSectorUseCase::new(reporter).execute(park, &self.sector) {
            Ok(sector) => LookupView {
                sector: self.sector.clone(),
                found: true,
                contents: Some(SectorView::from_sector(sector)),
            },
            Err(_) => LookupView {
                sector: self.sector.clone(),
                found: false,
                contents: None,
            },
        };
        Ok(serde_json::to_value(view)?)
    }
}

#[derive(Debug, Args)]
pub struct AnimalsCommand {
    /// Only this sector
    #[arg(short, long)]
    pub sector: Option<String>,
}

impl AnimalsCommand {
    pub fn run(&self, park: &Park, reporter: &dyn Reporter) -> anyhow::Result<Value> {
        let tour = SectorTourUseCase::new(reporter);

        let sectors: Vec<SectorView> = match &self.sector {
            Some(name) => match tour.list(park, name) {
                Ok(_) => park
                    .find_sector(name)
                    .map(SectorView::from_sector)
                    .into_iter()
                    .collect(),
                Err(UseCaseError::SectorNotFound(_)) => Vec::new(),
                Err(err) => return Err(err.into()),
            },
            None => {
                tour.list_all(park);
                park.sectors().iter().map(SectorView::from_sector).collect()
            }
        };

        Ok(json!({ "sectors": sectors }))
    }
}

#[derive(Debug, Args)]
pub struct SoundsCommand {
    /// Sector name
    pub sector: String,

    /// How many times each animal makes its sound
    #[arg(short, long, default_value_t = 1)]
    pub times: usize,
}

impl SoundsCommand {
    pub fn run(&self, park: &Park, reporter: &dyn Reporter) -> anyhow::Result<Value> {
        let tour = SectorTourUseCase::new(reporter);
        let sounds = match tour.sound_off(park, &self.sector, self.times) {
            Ok(sounds) => sounds,
            Err(UseCaseError::SectorNotFound(_)) => 0,
            Err(err) => return Err(err.into()),
        };
        Ok(json!({ "sector": self.sector, "sounds": sounds }))
    }
}

#[derive(Debug, Args)]
pub struct ExamineCommand {
    /// Animal name
    pub animal: String,

    /// Veterinarian name; defaults to the first one in the config
    #[arg(long)]
    pub vet: Option<String>,
}

impl ExamineCommand {
    pub fn run(&self, config: &ParkConfig, reporter: &dyn Reporter) -> anyhow::Result<Value> {
        let park = config.build_park()?;
        let vet = match &self.vet {
            Some(name) => Veterinarian::new(name.clone()),
            None => config
                .build_veterinarians()
                .into_iter()
                .next()
                .ok_or_else(|| anyhow!("no veterinarian configured; pass --vet"))?,
        };

        let exam = ExamineAnimalUseCase::new(reporter).execute(&park, &vet, &self.animal)?;

        Ok(json!({
            "veterinarian": exam.veterinarian,
            "animal": exam.animal,
            "species": exam.species.to_string(),
        }))
    }
}
