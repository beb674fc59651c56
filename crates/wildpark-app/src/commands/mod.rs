//! CLI subcommands
//!
//! Every command reports through the injected reporter and returns a JSON
//! value that `main` prints when `--json` is set.

mod demo;
mod inspect;

pub use demo::DemoCommand;
pub use inspect::{AnimalsCommand, ExamineCommand, FindCommand, SoundsCommand};

use serde_json::{json, Value};
use wildpark_domain::{Park, Reporter};
use wildpark_usecase::{CountAnimalsUseCase, ListStaffUseCase};

use crate::views::StatsView;

/// wildpark staff
pub fn staff(park: &Park, reporter: &dyn Reporter) -> anyhow::Result<Value> {
    let staff = ListStaffUseCase::new(reporter).execute(park);
    let names: Vec<&str> = staff.iter().map(|s| s.name()).collect();
    Ok(json!({ "staff": names }))
}

/// wildpark stats
pub fn stats(park: &Park, reporter: &dyn Reporter) -> anyhow::Result<Value> {
    CountAnimalsUseCase::new(reporter).execute(park);
    Ok(serde_json::to_value(StatsView::from_park(park))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wildpark_adapter::MemoryReporter;
    use wildpark_shared::ParkConfig;

    #[test]
    fn test_staff_command() {
        let reporter = MemoryReporter::new();
        let park = ParkConfig::demo().build_park().unwrap();

        let output = staff(&park, &reporter).unwrap();

        assert_eq!(output["staff"][0], "Carlos");
        assert_eq!(
            reporter.lines().last().map(String::as_str),
            Some("Carlos is working at the wildlife park.")
        );
    }

    #[test]
    fn test_stats_command() {
        let reporter = MemoryReporter::new();
        let park = ParkConfig::demo().build_park().unwrap();

        let output = stats(&park, &reporter).unwrap();

        assert_eq!(output["totalAnimals"], 1);
        assert_eq!(
            reporter.lines(),
            vec!["📊 Total animals in the wildlife park: 1"]
        );
    }
}
