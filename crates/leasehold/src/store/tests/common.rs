use crate::domain::{NewApplication, NewDocument, NewProperty, NewResident, RecordId};

pub(crate) fn building(name: &str) -> NewProperty {
    NewProperty {
        name: name.to_string(),
        address: "123 Main St".to_string(),
        units: 12,
        kind: "apartment".to_string(),
    }
}

pub(crate) fn jane_doe() -> NewResident {
    NewResident {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "555".to_string(),
        unit: "2A".to_string(),
        rent: 2400,
        status: None,
        lease_expiry: "Dec 2024".to_string(),
        last_payment: None,
    }
}

pub(crate) fn applicant(full_name: &str) -> NewApplication {
    NewApplication {
        full_name: full_name.to_string(),
        email: "applicant@example.com".to_string(),
        phone: "555-0100".to_string(),
        desired_unit: "3B".to_string(),
        monthly_income: 7200,
        references: Some("Former landlord: Oak Street Rentals".to_string()),
    }
}

pub(crate) fn lease_scan(related_id: Option<RecordId>) -> NewDocument {
    NewDocument {
        file_name: "lease.pdf".to_string(),
        file_type: "application/pdf".to_string(),
        file_size: 48_213,
        file_path: "uploads/1700000000-lease.pdf".to_string(),
        uploaded_by: "Jane Doe".to_string(),
        category: "lease".to_string(),
        related_id,
    }
}
