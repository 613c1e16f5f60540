use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{
    Application, ApplicationStatus, Document, Property, RecordId, RecordKind, Resident, Validate,
};
use crate::error::AppError;
use crate::store::{ApplicationRepository, EntityStore, Record, Repository};

/// Body of `PUT /api/applications/:id/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// Router builder exposing CRUD endpoints for every collection in the store.
pub fn store_router<S: EntityStore>(store: Arc<S>) -> Router {
    Router::new()
        .merge(collection_routes::<S, Property>())
        .merge(collection_routes::<S, Resident>())
        .merge(collection_routes::<S, Application>())
        .merge(collection_routes::<S, Document>())
        .route(
            "/api/applications/:id/status",
            put(application_status_handler::<S>),
        )
        .with_state(store)
}

fn collection_routes<S, R>() -> Router<Arc<S>>
where
    S: EntityStore,
    R: Record + Serialize,
    R::Draft: DeserializeOwned + Validate,
    R::Patch: DeserializeOwned + Validate,
{
    let collection = format!("/api/{}", R::KIND.collection());
    let member = format!("{collection}/:id");

    Router::new()
        .route(
            &collection,
            get(list_handler::<S, R>).post(create_handler::<S, R>),
        )
        .route(
            &member,
            get(get_handler::<S, R>)
                .put(update_handler::<S, R>)
                .delete(delete_handler::<S, R>),
        )
}

pub(crate) async fn list_handler<S, R>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<R>>, AppError>
where
    S: EntityStore,
    R: Record + Serialize,
{
    let records = R::repository(&*store).list()?;
    Ok(Json(records))
}

pub(crate) async fn get_handler<S, R>(
    State(store): State<Arc<S>>,
    path: Result<Path<RecordId>, PathRejection>,
) -> Result<Json<R>, AppError>
where
    S: EntityStore,
    R: Record + Serialize,
{
    let Path(id) = path?;
    R::repository(&*store)
        .get(id)?
        .map(Json)
        .ok_or_else(|| AppError::not_found(R::KIND, id))
}

pub(crate) async fn create_handler<S, R>(
    State(store): State<Arc<S>>,
    payload: Result<Json<R::Draft>, JsonRejection>,
) -> Result<(StatusCode, Json<R>), AppError>
where
    S: EntityStore,
    R: Record + Serialize,
    R::Draft: DeserializeOwned + Validate,
{
    let Json(draft) = payload?;
    draft.validate()?;
    let record = R::repository(&*store).create(draft)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub(crate) async fn update_handler<S, R>(
    State(store): State<Arc<S>>,
    path: Result<Path<RecordId>, PathRejection>,
    payload: Result<Json<R::Patch>, JsonRejection>,
) -> Result<Json<R>, AppError>
where
    S: EntityStore,
    R: Record + Serialize,
    R::Patch: DeserializeOwned + Validate,
{
    let Path(id) = path?;
    let Json(patch) = payload?;
    patch.validate()?;
    R::repository(&*store)
        .update(id, patch)?
        .map(Json)
        .ok_or_else(|| AppError::not_found(R::KIND, id))
}

pub(crate) async fn delete_handler<S, R>(
    State(store): State<Arc<S>>,
    path: Result<Path<RecordId>, PathRejection>,
) -> Result<StatusCode, AppError>
where
    S: EntityStore,
    R: Record,
{
    let Path(id) = path?;
    if R::repository(&*store).delete(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(R::KIND, id))
    }
}

pub(crate) async fn application_status_handler<S: EntityStore>(
    State(store): State<Arc<S>>,
    path: Result<Path<RecordId>, PathRejection>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Application>, AppError> {
    let Path(id) = path?;
    let Json(update) = payload?;
    let applications = store.applications();

    if let Some(current) = applications.get(id)? {
        if current.status.is_terminal() && current.status != update.status {
            warn!(
                %id,
                from = current.status.label(),
                to = update.status.label(),
                "overwriting a decided application"
            );
        }
    }

    applications
        .update_status(id, update.status)?
        .map(Json)
        .ok_or_else(|| AppError::not_found(RecordKind::Application, id))
}
