//! ListStaffUseCase - Roll call of everyone registered with the park

use std::sync::Arc;

use wildpark_domain::{Park, ParkEvent, Reporter, Staff};

pub struct ListStaffUseCase<'r> {
    reporter: &'r dyn Reporter,
}

impl<'r> ListStaffUseCase<'r> {
    pub fn new(reporter: &'r dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Report a header, then have each member report for work in order
    pub fn execute(&self, park: &Park) -> Vec<Arc<Staff>> {
        let facility = park.kind().display_name();
        self.reporter.report(&ParkEvent::StaffListing {
            facility: facility.to_string(),
        });

        for member in park.list_staff() {
            member.work(facility, self.reporter);
        }

        park.list_staff().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingReporter;
    use wildpark_domain::FacilityKind;

    #[test]
    fn test_roster_in_order() {
        let reporter = RecordingReporter::default();
        let mut park = Park::new("City Zoo", FacilityKind::Zoo);
        park.add_staff(Arc::new(Staff::new("Carlos")));
        park.add_staff(Arc::new(Staff::new("Ana")));

        let staff = ListStaffUseCase::new(&reporter).execute(&park);

        assert_eq!(staff.len(), 2);
        assert_eq!(
            reporter.lines(),
            vec![
                "📌 Staff of the zoo:",
                "Carlos is working at the zoo.",
                "Ana is working at the zoo.",
            ]
        );
    }

    #[test]
    fn test_returned_staff_are_shared() {
        let reporter = RecordingReporter::default();
        let carlos = Arc::new(Staff::new("Carlos"));
        let mut park = Park::default();
        park.add_staff(Arc::clone(&carlos));

        let staff = ListStaffUseCase::new(&reporter).execute(&park);

        assert!(Arc::ptr_eq(&staff[0], &carlos));
    }

    #[test]
    fn test_empty_roster_reports_header_only() {
        let reporter = RecordingReporter::default();
        let staff = ListStaffUseCase::new(&reporter).execute(&Park::default());

        assert!(staff.is_empty());
        assert_eq!(reporter.lines(), vec!["📌 Staff of the wildlife park:"]);
    }
}
