//! Sample portfolio loaded into a fresh store at startup.

use serde::Serialize;
use tracing::info;

use crate::domain::{
    ApplicationStatus, NewApplication, NewDocument, NewProperty, NewResident, ResidentStatus,
};
use crate::store::{ApplicationRepository, EntityStore, Repository, RepositoryError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub properties: usize,
    pub residents: usize,
    pub applications: usize,
    pub documents: usize,
}

fn property(name: &str, address: &str, units: u32, kind: &str) -> NewProperty {
    NewProperty {
        name: name.to_string(),
        address: address.to_string(),
        units,
        kind: kind.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn resident(
    name: &str,
    email: &str,
    phone: &str,
    unit: &str,
    rent: u32,
    status: ResidentStatus,
    lease_expiry: &str,
    last_payment: &str,
) -> NewResident {
    NewResident {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        unit: unit.to_string(),
        rent,
        status: Some(status),
        lease_expiry: lease_expiry.to_string(),
        last_payment: Some(last_payment.to_string()),
    }
}

fn application(
    full_name: &str,
    email: &str,
    desired_unit: &str,
    monthly_income: u32,
    references: Option<&str>,
) -> NewApplication {
    NewApplication {
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: "(555) 010-2000".to_string(),
        desired_unit: desired_unit.to_string(),
        monthly_income,
        references: references.map(str::to_string),
    }
}

/// Inserts the sample portfolio through the regular store operations.
pub fn load_sample_data<S>(store: &S) -> Result<SeedSummary, RepositoryError>
where
    S: EntityStore + ?Sized,
{
    let properties = [
        property("Maple Court", "123 Main St", 24, "apartment"),
        property("Riverside Lofts", "48 River Rd", 12, "condo"),
        property("Oak Row Townhomes", "9 Oak Ave", 6, "townhouse"),
    ];
    for draft in properties {
        store.properties().create(draft)?;
    }

    let residents = [
        resident(
            "Sarah Johnson",
            "sarah.johnson@example.com",
            "(555) 123-4567",
            "4B",
            2400,
            ResidentStatus::Active,
            "Dec 2024",
            "Nov 1, 2024",
        ),
        resident(
            "Michael Chen",
            "michael.chen@example.com",
            "(555) 234-5678",
            "2A",
            2200,
            ResidentStatus::Late,
            "Mar 2025",
            "Oct 1, 2024",
        ),
        resident(
            "Emily Rodriguez",
            "emily.rodriguez@example.com",
            "(555) 345-6789",
            "1C",
            1950,
            ResidentStatus::Notice,
            "Jan 2025",
            "Nov 1, 2024",
        ),
        resident(
            "David Kim",
            "david.kim@example.com",
            "(555) 456-7890",
            "3D",
            2600,
            ResidentStatus::Active,
            "Jun 2025",
            "Nov 1, 2024",
        ),
    ];
    let mut resident_ids = Vec::with_capacity(residents.len());
    for draft in residents {
        resident_ids.push(store.residents().create(draft)?.id);
    }

    let applications = store.applications();
    let pending = applications.create(application(
        "Alex Thompson",
        "alex.thompson@example.com",
        "5A",
        6800,
        Some("Previous landlord: Greenview Apartments"),
    ))?;
    let approved = applications.create(application(
        "Priya Patel",
        "priya.patel@example.com",
        "2C",
        8200,
        Some("Employer: Northwind Labs"),
    ))?;
    let rejected = applications.create(application(
        "Jordan Blake",
        "jordan.blake@example.com",
        "1A",
        3100,
        None,
    ))?;
    applications.update_status(approved.id, ApplicationStatus::Approved)?;
    applications.update_status(rejected.id, ApplicationStatus::Rejected)?;

    let documents = [
        NewDocument {
            file_name: "lease-4B.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            file_size: 182_400,
            file_path: "uploads/lease-4B.pdf".to_string(),
            uploaded_by: "Property Manager".to_string(),
            category: "lease".to_string(),
            related_id: resident_ids.first().copied(),
        },
        NewDocument {
            file_name: "paystub-thompson.png".to_string(),
            file_type: "image/png".to_string(),
            file_size: 96_512,
            file_path: "uploads/paystub-thompson.png".to_string(),
            uploaded_by: "Alex Thompson".to_string(),
            category: "income".to_string(),
            related_id: Some(pending.id),
        },
    ];
    for draft in documents {
        store.documents().create(draft)?;
    }

    let summary = SeedSummary {
        properties: store.properties().list()?.len(),
        residents: store.residents().list()?.len(),
        applications: store.applications().list()?.len(),
        documents: store.documents().list()?.len(),
    };
    info!(?summary, "sample data loaded");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;
    use crate::stats::DashboardStats;
    use crate::store::MemoryStore;

    #[test]
    fn seeds_every_collection() {
        let store = MemoryStore::new();
        let summary = load_sample_data(&store).expect("seed loads");

        assert_eq!(
            summary,
            SeedSummary {
                properties: 3,
                residents: 4,
                applications: 3,
                documents: 2,
            }
        );
        let first = store.properties().get(RecordId(1)).unwrap().expect("seeded");
        assert_eq!(first.name, "Maple Court");
    }

    #[test]
    fn seeded_portfolio_has_mixed_statuses() {
        let store = MemoryStore::new();
        load_sample_data(&store).expect("seed loads");

        let stats = DashboardStats::from_store(&store).expect("stats");
        assert_eq!(stats.late_residents, 1);
        assert_eq!(stats.rent_at_risk, 2200);
        assert_eq!(stats.pending_applications, 1);
        assert_eq!(stats.approved_applications, 1);
        assert_eq!(stats.rejected_applications, 1);
    }
}
