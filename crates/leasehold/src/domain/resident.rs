use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    optional_email, optional_text, require_email, require_text, Validate, ValidationError,
};
use super::{deserialize_nullable, RecordId, RecordKind};
use crate::store::{EntityStore, Record, Repository};

/// Payment standing of a resident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidentStatus {
    #[default]
    Active,
    Late,
    Notice,
}

impl ResidentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ResidentStatus::Active => "active",
            ResidentStatus::Late => "late",
            ResidentStatus::Notice => "notice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub unit: String,
    pub rent: u32,
    pub status: ResidentStatus,
    pub lease_expiry: String,
    pub last_payment: Option<String>,
}

/// Create input; `status` falls back to [`ResidentStatus::Active`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResident {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub unit: String,
    pub rent: u32,
    #[serde(default)]
    pub status: Option<ResidentStatus>,
    pub lease_expiry: String,
    #[serde(default)]
    pub last_payment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub rent: Option<u32>,
    #[serde(default)]
    pub status: Option<ResidentStatus>,
    #[serde(default)]
    pub lease_expiry: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub last_payment: Option<Option<String>>,
}

impl Record for Resident {
    type Draft = NewResident;
    type Patch = ResidentPatch;

    const KIND: RecordKind = RecordKind::Resident;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewResident, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            unit: draft.unit,
            rent: draft.rent,
            status: draft.status.unwrap_or_default(),
            lease_expiry: draft.lease_expiry,
            last_payment: draft.last_payment,
        }
    }

    fn apply(&mut self, patch: ResidentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
        if let Some(rent) = patch.rent {
            self.rent = rent;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(lease_expiry) = patch.lease_expiry {
            self.lease_expiry = lease_expiry;
        }
        if let Some(last_payment) = patch.last_payment {
            self.last_payment = last_payment;
        }
    }

    fn repository<S: EntityStore + ?Sized>(store: &S) -> &dyn Repository<Self> {
        store.residents()
    }
}

impl Validate for NewResident {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_email("email", &self.email)?;
        require_text("phone", &self.phone)?;
        require_text("unit", &self.unit)?;
        require_text("leaseExpiry", &self.lease_expiry)
    }
}

impl Validate for ResidentPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_text("name", self.name.as_deref())?;
        optional_email("email", self.email.as_deref())?;
        optional_text("phone", self.phone.as_deref())?;
        optional_text("unit", self.unit.as_deref())?;
        optional_text("leaseExpiry", self.lease_expiry.as_deref())
    }
}
