use serde::Serialize;

use crate::domain::{Application, ApplicationStatus, Resident, ResidentStatus};
use crate::store::{EntityStore, Repository, RepositoryError};

/// Dashboard aggregates folded from resident and application listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_residents: usize,
    pub active_residents: usize,
    pub late_residents: usize,
    pub notice_residents: usize,
    /// Sum of monthly rent across all residents.
    pub monthly_rent_roll: u64,
    /// Monthly rent owed by residents marked late.
    pub rent_at_risk: u64,
    pub total_applications: usize,
    pub pending_applications: usize,
    pub approved_applications: usize,
    pub rejected_applications: usize,
}

impl DashboardStats {
    pub fn collect(residents: &[Resident], applications: &[Application]) -> Self {
        let mut stats = Self {
            total_residents: residents.len(),
            total_applications: applications.len(),
            ..Self::default()
        };

        for resident in residents {
            let rent = u64::from(resident.rent);
            stats.monthly_rent_roll += rent;
            match resident.status {
                ResidentStatus::Active => stats.active_residents += 1,
                ResidentStatus::Late => {
                    stats.late_residents += 1;
                    stats.rent_at_risk += rent;
                }
                ResidentStatus::Notice => stats.notice_residents += 1,
            }
        }

        for application in applications {
            match application.status {
                ApplicationStatus::Pending => stats.pending_applications += 1,
                ApplicationStatus::Approved => stats.approved_applications += 1,
                ApplicationStatus::Rejected => stats.rejected_applications += 1,
            }
        }

        stats
    }

    pub fn from_store<S: EntityStore + ?Sized>(store: &S) -> Result<Self, RepositoryError> {
        let residents = store.residents().list()?;
        let applications = store.applications().list()?;
        Ok(Self::collect(&residents, &applications))
    }
}
