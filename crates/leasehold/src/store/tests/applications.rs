use super::common::*;
use crate::domain::{ApplicationPatch, ApplicationStatus, NewApplication, RecordId};
use crate::store::{ApplicationRepository, EntityStore, MemoryStore, Repository};

#[test]
fn new_applications_start_pending_with_submission_time() {
    let store = MemoryStore::new();
    let before = chrono::Utc::now();

    let application = store.applications().create(applicant("Sam Lee")).unwrap();

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert!(application.submitted_at >= before);
    assert!(application.submitted_at <= chrono::Utc::now());
}

#[test]
fn client_supplied_status_is_ignored_on_create() {
    let payload = serde_json::json!({
        "fullName": "Sam Lee",
        "email": "sam@example.com",
        "phone": "555-0100",
        "desiredUnit": "3B",
        "monthlyIncome": 7200,
        "status": "approved",
        "submittedAt": "2020-01-01T00:00:00Z"
    });
    let draft: NewApplication = serde_json::from_value(payload).expect("draft deserializes");

    let store = MemoryStore::new();
    let application = store.applications().create(draft).unwrap();

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_ne!(application.submitted_at.to_rfc3339(), "2020-01-01T00:00:00+00:00");
}

#[test]
fn status_updates_overwrite_each_other() {
    let store = MemoryStore::new();
    let applications = store.applications();
    let application = applications.create(applicant("Sam Lee")).unwrap();

    applications
        .update_status(application.id, ApplicationStatus::Approved)
        .unwrap();
    let stored = applications.get(application.id).unwrap().expect("present");
    assert_eq!(stored.status, ApplicationStatus::Approved);

    let rejected = applications
        .update_status(application.id, ApplicationStatus::Rejected)
        .unwrap()
        .expect("present");
    assert_eq!(rejected.status, ApplicationStatus::Rejected);
    assert_eq!(rejected.submitted_at, application.submitted_at);
    assert_eq!(rejected.full_name, application.full_name);
}

#[test]
fn status_update_on_missing_application_is_none() {
    let store = MemoryStore::new();

    let outcome = store
        .applications()
        .update_status(RecordId(9), ApplicationStatus::Approved)
        .unwrap();

    assert!(outcome.is_none());
}

#[test]
fn general_update_cannot_touch_status() {
    let store = MemoryStore::new();
    let application = store.applications().create(applicant("Sam Lee")).unwrap();

    let patch: ApplicationPatch = serde_json::from_value(serde_json::json!({
        "monthlyIncome": 8100,
        "status": "approved"
    }))
    .expect("patch deserializes");
    let updated = store
        .applications()
        .update(application.id, patch)
        .unwrap()
        .expect("present");

    assert_eq!(updated.monthly_income, 8100);
    assert_eq!(updated.status, ApplicationStatus::Pending);
    assert_eq!(updated.submitted_at, application.submitted_at);
}

#[test]
fn references_can_be_cleared_with_null() {
    let store = MemoryStore::new();
    let application = store.applications().create(applicant("Sam Lee")).unwrap();
    assert!(application.references.is_some());

    let patch: ApplicationPatch =
        serde_json::from_value(serde_json::json!({ "references": null })).expect("patch");
    let updated = store
        .applications()
        .update(application.id, patch)
        .unwrap()
        .expect("present");

    assert_eq!(updated.references, None);
}

#[test]
fn terminal_statuses() {
    assert!(!ApplicationStatus::Pending.is_terminal());
    assert!(ApplicationStatus::Approved.is_terminal());
    assert!(ApplicationStatus::Rejected.is_terminal());
}
