use crate::infra::build_store;
use chrono::Local;
use clap::Args;
use leasehold::config::StoreConfig;
use leasehold::domain::{
    ApplicationPatch, ApplicationStatus, NewApplication, NewResident, ResidentPatch,
    ResidentStatus,
};
use leasehold::error::AppError;
use leasehold::stats::DashboardStats;
use leasehold::store::{ApplicationRepository, EntityStore, MemoryStore, Repository};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Start from an empty store instead of the sample portfolio.
    #[arg(long)]
    pub(crate) no_seed: bool,
    /// Print every record in each collection before the lifecycle walk-through.
    #[arg(long)]
    pub(crate) list_records: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        no_seed,
        list_records,
    } = args;

    let store = build_store(&StoreConfig {
        seed_sample_data: !no_seed,
    })?;

    println!(
        "Property management store demo ({})",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    if list_records {
        render_portfolio(&store)?;
    }

    println!("\nResident lifecycle");
    let resident = store.residents().create(NewResident {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "555".to_string(),
        unit: "2A".to_string(),
        rent: 2400,
        status: None,
        lease_expiry: "Dec 2024".to_string(),
        last_payment: None,
    })?;
    println!(
        "- Created resident #{} {} in unit {} (status {})",
        resident.id,
        resident.name,
        resident.unit,
        resident.status.label()
    );
    if let Some(updated) = store.residents().update(
        resident.id,
        ResidentPatch {
            status: Some(ResidentStatus::Late),
            ..ResidentPatch::default()
        },
    )? {
        println!(
            "- Marked resident #{} as {} (rent {} unchanged)",
            updated.id,
            updated.status.label(),
            updated.rent
        );
    }

    println!("\nApplication lifecycle");
    let applications = store.applications();
    let application = applications.create(NewApplication {
        full_name: "Sam Lee".to_string(),
        email: "sam@example.com".to_string(),
        phone: "555-0100".to_string(),
        desired_unit: "3B".to_string(),
        monthly_income: 7200,
        references: None,
    })?;
    println!(
        "- Received application #{} from {} -> {} (submitted {})",
        application.id,
        application.full_name,
        application.status.label(),
        application.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    applications.update(
        application.id,
        ApplicationPatch {
            references: Some(Some("Employer: Contoso Ltd".to_string())),
            ..ApplicationPatch::default()
        },
    )?;
    for status in [ApplicationStatus::Approved, ApplicationStatus::Rejected] {
        if let Some(decided) = applications.update_status(application.id, status)? {
            println!("- Application #{} now {}", decided.id, decided.status.label());
        }
    }

    let removed = store.residents().delete(resident.id)?;
    let removed_again = store.residents().delete(resident.id)?;
    println!(
        "\nDeleted resident #{}: {} (second delete: {})",
        resident.id, removed, removed_again
    );

    render_stats(&DashboardStats::from_store(&*store)?);
    Ok(())
}

fn render_portfolio(store: &MemoryStore) -> Result<(), AppError> {
    println!("\nProperties");
    for property in store.properties().list()? {
        println!(
            "- #{} {} | {} | {} units | {}",
            property.id, property.name, property.address, property.units, property.kind
        );
    }

    println!("\nResidents");
    for resident in store.residents().list()? {
        println!(
            "- #{} {} | unit {} | ${} | {} | lease to {}",
            resident.id,
            resident.name,
            resident.unit,
            resident.rent,
            resident.status.label(),
            resident.lease_expiry
        );
    }

    println!("\nApplications");
    for application in store.applications().list()? {
        println!(
            "- #{} {} | unit {} | income ${} | {}",
            application.id,
            application.full_name,
            application.desired_unit,
            application.monthly_income,
            application.status.label()
        );
    }

    println!("\nDocuments");
    for document in store.documents().list()? {
        let related = match document.related_id {
            Some(id) => format!(" (related #{id})"),
            None => String::new(),
        };
        println!(
            "- #{} {} | {} | {} bytes | {}{}",
            document.id,
            document.file_name,
            document.file_type,
            document.file_size,
            document.category,
            related
        );
    }

    Ok(())
}

fn render_stats(stats: &DashboardStats) {
    println!("\nDashboard");
    println!(
        "- Residents: {} total | {} active | {} late | {} on notice",
        stats.total_residents, stats.active_residents, stats.late_residents, stats.notice_residents
    );
    println!(
        "- Rent roll ${} / month | ${} at risk",
        stats.monthly_rent_roll, stats.rent_at_risk
    );
    println!(
        "- Applications: {} total | {} pending | {} approved | {} rejected",
        stats.total_applications,
        stats.pending_applications,
        stats.approved_applications,
        stats.rejected_applications
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_against_seeded_and_empty_stores() {
        run_demo(DemoArgs {
            no_seed: false,
            list_records: true,
        })
        .expect("seeded demo runs");
        run_demo(DemoArgs::default()).expect("default demo runs");
        run_demo(DemoArgs {
            no_seed: true,
            list_records: false,
        })
        .expect("empty demo runs");
    }
}
