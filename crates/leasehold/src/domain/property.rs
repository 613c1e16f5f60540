use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{optional_text, require_text, Validate, ValidationError};
use super::{RecordId, RecordKind};
use crate::store::{EntityStore, Record, Repository};

/// A managed building or lot. Landlord ownership lives outside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub units: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub name: String,
    pub address: String,
    pub units: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub units: Option<u32>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Record for Property {
    type Draft = NewProperty;
    type Patch = PropertyPatch;

    const KIND: RecordKind = RecordKind::Property;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewProperty, _now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            address: draft.address,
            units: draft.units,
            kind: draft.kind,
        }
    }

    fn apply(&mut self, patch: PropertyPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(units) = patch.units {
            self.units = units;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }

    fn repository<S: EntityStore + ?Sized>(store: &S) -> &dyn Repository<Self> {
        store.properties()
    }
}

impl Validate for NewProperty {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("address", &self.address)?;
        require_text("type", &self.kind)
    }
}

impl Validate for PropertyPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_text("name", self.name.as_deref())?;
        optional_text("address", self.address.as_deref())?;
        optional_text("type", self.kind.as_deref())
    }
}
