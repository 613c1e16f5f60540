use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use super::record::Record;
use super::repository::{ApplicationRepository, EntityStore, Repository, RepositoryError};
use crate::domain::{Application, ApplicationStatus, Document, Property, RecordId, Resident};

/// One in-memory collection with its own id counter.
///
/// Rows are keyed by id; since ids only grow, key order is insertion order.
pub struct Table<R> {
    state: RwLock<TableState<R>>,
}

struct TableState<R> {
    /// `None` once every id has been handed out.
    next_id: Option<u32>,
    rows: BTreeMap<RecordId, R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl<R> Table<R> {
    pub(crate) fn starting_at(first_id: u32) -> Self {
        Self {
            state: RwLock::new(TableState {
                next_id: Some(first_id),
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<R: Record> Table<R> {
    fn read(&self) -> Result<RwLockReadGuard<'_, TableState<R>>, RepositoryError> {
        self.state.read().map_err(|_| poisoned::<R>())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, TableState<R>>, RepositoryError> {
        self.state.write().map_err(|_| poisoned::<R>())
    }

    fn modify<F>(&self, id: RecordId, change: F) -> Result<Option<R>, RepositoryError>
    where
        F: FnOnce(&mut R),
    {
        let mut state = self.write()?;
        let Some(record) = state.rows.get_mut(&id) else {
            return Ok(None);
        };
        change(record);
        Ok(Some(record.clone()))
    }
}

fn poisoned<R: Record>() -> RepositoryError {
    RepositoryError::Unavailable(format!("{} table lock poisoned", R::KIND))
}

impl<R: Record> Repository<R> for Table<R> {
    fn list(&self) -> Result<Vec<R>, RepositoryError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    fn get(&self, id: RecordId) -> Result<Option<R>, RepositoryError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    fn create(&self, draft: R::Draft) -> Result<R, RepositoryError> {
        let mut state = self.write()?;
        let next = state
            .next_id
            .ok_or(RepositoryError::IdsExhausted { kind: R::KIND })?;
        state.next_id = next.checked_add(1);

        let record = R::from_draft(RecordId(next), draft, Utc::now());
        state.rows.insert(record.id(), record.clone());
        debug!(kind = R::KIND.label(), id = %record.id(), "record created");
        Ok(record)
    }

    fn update(&self, id: RecordId, patch: R::Patch) -> Result<Option<R>, RepositoryError> {
        let updated = self.modify(id, |record| record.apply(patch))?;
        if let Some(record) = &updated {
            debug!(kind = R::KIND.label(), id = %record.id(), "record updated");
        }
        Ok(updated)
    }

    fn delete(&self, id: RecordId) -> Result<bool, RepositoryError> {
        let removed = self.write()?.rows.remove(&id).is_some();
        if removed {
            debug!(kind = R::KIND.label(), %id, "record deleted");
        }
        Ok(removed)
    }
}

impl ApplicationRepository for Table<Application> {
    fn update_status(
        &self,
        id: RecordId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, RepositoryError> {
        let updated = self.modify(id, |application| application.status = status)?;
        if updated.is_some() {
            debug!(%id, status = status.label(), "application status changed");
        }
        Ok(updated)
    }
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    properties: Table<Property>,
    residents: Table<Resident>,
    applications: Table<Application>,
    documents: Table<Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for MemoryStore {
    type Properties = Table<Property>;
    type Residents = Table<Resident>;
    type Applications = Table<Application>;
    type Documents = Table<Document>;

    fn properties(&self) -> &Table<Property> {
        &self.properties
    }

    fn residents(&self) -> &Table<Resident> {
        &self.residents
    }

    fn applications(&self) -> &Table<Application> {
        &self.applications
    }

    fn documents(&self) -> &Table<Document> {
        &self.documents
    }
}
