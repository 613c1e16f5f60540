use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    optional_email, optional_text, require_email, require_text, Validate, ValidationError,
};
use super::{deserialize_nullable, RecordId, RecordKind};
use crate::store::{EntityStore, Record, Repository};

/// Review outcome of a rental application.
///
/// `Pending` moves to `Approved` or `Rejected`. The store records whatever
/// status it is handed; callers decide whether to honor the transition graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub desired_unit: String,
    pub monthly_income: u32,
    pub references: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Create input. Status and submission time are never client supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub desired_unit: String,
    pub monthly_income: u32,
    #[serde(default)]
    pub references: Option<String>,
}

/// General update. Status changes go through
/// [`ApplicationRepository::update_status`](crate::store::ApplicationRepository::update_status).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub desired_unit: Option<String>,
    #[serde(default)]
    pub monthly_income: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub references: Option<Option<String>>,
}

impl Record for Application {
    type Draft = NewApplication;
    type Patch = ApplicationPatch;

    const KIND: RecordKind = RecordKind::Application;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewApplication, now: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: draft.full_name,
            email: draft.email,
            phone: draft.phone,
            desired_unit: draft.desired_unit,
            monthly_income: draft.monthly_income,
            references: draft.references,
            status: ApplicationStatus::Pending,
            submitted_at: now,
        }
    }

    fn apply(&mut self, patch: ApplicationPatch) {
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(desired_unit) = patch.desired_unit {
            self.desired_unit = desired_unit;
        }
        if let Some(monthly_income) = patch.monthly_income {
            self.monthly_income = monthly_income;
        }
        if let Some(references) = patch.references {
            self.references = references;
        }
    }

    fn repository<S: EntityStore + ?Sized>(store: &S) -> &dyn Repository<Self> {
        store.applications()
    }
}

impl Validate for NewApplication {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("fullName", &self.full_name)?;
        require_email("email", &self.email)?;
        require_text("phone", &self.phone)?;
        require_text("desiredUnit", &self.desired_unit)
    }
}

impl Validate for ApplicationPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_text("fullName", self.full_name.as_deref())?;
        optional_email("email", self.email.as_deref())?;
        optional_text("phone", self.phone.as_deref())?;
        optional_text("desiredUnit", self.desired_unit.as_deref())
    }
}
