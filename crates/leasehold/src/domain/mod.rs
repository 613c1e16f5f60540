//! Records held by the entity store, along with the create ("draft") and patch
//! shapes the HTTP layer deserializes into.

mod application;
mod document;
mod property;
mod resident;
pub mod validation;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub use application::{Application, ApplicationPatch, ApplicationStatus, NewApplication};
pub use document::{Document, DocumentPatch, NewDocument};
pub use property::{NewProperty, Property, PropertyPatch};
pub use resident::{NewResident, Resident, ResidentPatch, ResidentStatus};
pub use validation::{Validate, ValidationError};

/// Store-assigned identifier, unique and increasing within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four collections the store manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Property,
    Resident,
    Application,
    Document,
}

impl RecordKind {
    pub const fn label(self) -> &'static str {
        match self {
            RecordKind::Property => "Property",
            RecordKind::Resident => "Resident",
            RecordKind::Application => "Application",
            RecordKind::Document => "Document",
        }
    }

    /// Path segment used under `/api`.
    pub const fn collection(self) -> &'static str {
        match self {
            RecordKind::Property => "properties",
            RecordKind::Resident => "residents",
            RecordKind::Application => "applications",
            RecordKind::Document => "documents",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`)
/// for nullable patch fields. Pair with `#[serde(default)]`.
pub(crate) fn deserialize_nullable<'de, D, T>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
