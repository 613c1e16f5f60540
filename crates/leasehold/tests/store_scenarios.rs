use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use leasehold::domain::{
    ApplicationStatus, NewApplication, NewProperty, NewResident, RecordId, ResidentStatus,
};
use leasehold::store::{ApplicationRepository, EntityStore, MemoryStore, Repository};

fn building(name: &str) -> NewProperty {
    NewProperty {
        name: name.to_string(),
        address: "123 Main St".to_string(),
        units: 12,
        kind: "apartment".to_string(),
    }
}

#[test]
fn properties_receive_sequential_ids_in_creation_order() {
    let store = MemoryStore::new();

    let first = store
        .properties()
        .create(building("Building A"))
        .expect("create succeeds");
    let second = store
        .properties()
        .create(building("Building B"))
        .expect("create succeeds");

    assert_eq!(first.id, RecordId(1));
    assert_eq!(second.id, RecordId(2));
    assert_eq!(
        store.properties().list().expect("list succeeds"),
        vec![first, second]
    );
}

#[test]
fn resident_without_status_is_active() {
    let store = MemoryStore::new();

    let resident = store
        .residents()
        .create(NewResident {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555".to_string(),
            unit: "2A".to_string(),
            rent: 2400,
            status: None,
            lease_expiry: "Dec 2024".to_string(),
            last_payment: None,
        })
        .expect("create succeeds");

    assert_eq!(resident.status, ResidentStatus::Active);
    assert_eq!(resident.rent, 2400);
}

#[test]
fn application_status_can_be_approved_then_rejected() {
    let store = MemoryStore::new();
    let applications = store.applications();

    let application = applications
        .create(NewApplication {
            full_name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            phone: "555-0100".to_string(),
            desired_unit: "3B".to_string(),
            monthly_income: 7200,
            references: None,
        })
        .expect("create succeeds");
    assert_eq!(application.status, ApplicationStatus::Pending);

    applications
        .update_status(application.id, ApplicationStatus::Approved)
        .expect("update succeeds");
    let stored = applications
        .get(application.id)
        .expect("get succeeds")
        .expect("application present");
    assert_eq!(stored.status, ApplicationStatus::Approved);

    applications
        .update_status(application.id, ApplicationStatus::Rejected)
        .expect("update succeeds");
    let stored = applications
        .get(application.id)
        .expect("get succeeds")
        .expect("application present");
    assert_eq!(stored.status, ApplicationStatus::Rejected);
}

#[test]
fn concurrent_creates_never_share_an_id() {
    let store = Arc::new(MemoryStore::new());

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..25)
                    .map(|n| {
                        store
                            .properties()
                            .create(building(&format!("Building {worker}-{n}")))
                            .expect("create succeeds")
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: BTreeSet<RecordId> = workers
        .into_iter()
        .flat_map(|handle| handle.join().expect("worker completes"))
        .collect();

    assert_eq!(ids.len(), 200);
    assert_eq!(ids.first(), Some(&RecordId(1)));
    assert_eq!(ids.last(), Some(&RecordId(200)));

    let listed: Vec<RecordId> = store
        .properties()
        .list()
        .expect("list succeeds")
        .into_iter()
        .map(|property| property.id)
        .collect();
    assert!(listed.windows(2).all(|pair| pair[0] < pair[1]));
}
