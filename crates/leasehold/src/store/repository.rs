use super::record::Record;
use crate::domain::{
    Application, ApplicationStatus, Document, Property, RecordId, RecordKind, Resident,
};

/// CRUD contract for one collection.
pub trait Repository<R: Record>: Send + Sync {
    /// All records in insertion order.
    fn list(&self) -> Result<Vec<R>, RepositoryError>;
    fn get(&self, id: RecordId) -> Result<Option<R>, RepositoryError>;
    /// Assigns the next id and returns the stored record.
    fn create(&self, draft: R::Draft) -> Result<R, RepositoryError>;
    /// Returns `None` when no record has `id`.
    fn update(&self, id: RecordId, patch: R::Patch) -> Result<Option<R>, RepositoryError>;
    /// Returns `false` when no record has `id`. Never cascades.
    fn delete(&self, id: RecordId) -> Result<bool, RepositoryError>;
}

/// Applications additionally expose the only path that changes `status`.
pub trait ApplicationRepository: Repository<Application> {
    fn update_status(
        &self,
        id: RecordId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, RepositoryError>;
}

/// The four collections behind one handle, owned by the composition root.
pub trait EntityStore: Send + Sync + 'static {
    type Properties: Repository<Property> + 'static;
    type Residents: Repository<Resident> + 'static;
    type Applications: ApplicationRepository + 'static;
    type Documents: Repository<Document> + 'static;

    fn properties(&self) -> &Self::Properties;
    fn residents(&self) -> &Self::Residents;
    fn applications(&self) -> &Self::Applications;
    fn documents(&self) -> &Self::Documents;
}

/// Error enumeration for storage failures. Missing records are not errors.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{kind} identifiers exhausted")]
    IdsExhausted { kind: RecordKind },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
