use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use leasehold::domain::{Document, NewDocument, RecordId, Validate};
use leasehold::error::AppError;
use leasehold::http::store_router;
use leasehold::stats::DashboardStats;
use leasehold::store::{EntityStore, Repository};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Metadata reported by the upload collaborator after the file is on disk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UploadedFile {
    pub(crate) file_name: String,
    #[serde(default)]
    pub(crate) file_type: Option<String>,
    pub(crate) file_size: u64,
    pub(crate) file_path: String,
    pub(crate) uploaded_by: String,
    #[serde(default = "default_category")]
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) related_id: Option<RecordId>,
}

fn default_category() -> String {
    "other".to_string()
}

impl UploadedFile {
    /// Falls back to a MIME type guessed from the file name.
    fn into_draft(self) -> NewDocument {
        let file_type = self
            .file_type
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| {
                mime_guess::from_path(&self.file_name)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string()
            });

        NewDocument {
            file_name: self.file_name,
            file_type,
            file_size: self.file_size,
            file_path: self.file_path,
            uploaded_by: self.uploaded_by,
            category: self.category,
            related_id: self.related_id,
        }
    }
}

pub(crate) fn with_service_routes<S: EntityStore>(store: Arc<S>) -> Router {
    let extras = Router::new()
        .route("/api/stats", get(stats_endpoint::<S>))
        .route("/api/upload-document", post(upload_document_endpoint::<S>))
        .with_state(store.clone());

    store_router(store)
        .merge(extras)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn stats_endpoint<S: EntityStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(DashboardStats::from_store(&*store)?))
}

pub(crate) async fn upload_document_endpoint<S: EntityStore>(
    State(store): State<Arc<S>>,
    payload: Result<Json<UploadedFile>, JsonRejection>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    let Json(upload) = payload?;
    let draft = upload.into_draft();
    draft.validate()?;

    let document = store.documents().create(draft)?;
    info!(
        id = %document.id,
        file_name = %document.file_name,
        file_type = %document.file_type,
        "document registered"
    );
    Ok((StatusCode::CREATED, Json(document)))
}
