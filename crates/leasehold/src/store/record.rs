use chrono::{DateTime, Utc};

use super::repository::{EntityStore, Repository};
use crate::domain::{RecordId, RecordKind};

/// A flat record the store can hold.
pub trait Record: Clone + Send + Sync + 'static {
    /// Client-supplied fields for `create`.
    type Draft: Send + 'static;
    /// Optional fields merged by `update`.
    type Patch: Send + 'static;

    const KIND: RecordKind;

    fn id(&self) -> RecordId;

    /// Builds the stored record, applying entity defaults and creation
    /// timestamps.
    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Shallow merge: fields absent from the patch are left untouched.
    fn apply(&mut self, patch: Self::Patch);

    /// Selects the collection holding this record type.
    fn repository<S: EntityStore + ?Sized>(store: &S) -> &dyn Repository<Self>;
}
