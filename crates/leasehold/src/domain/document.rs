use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{optional_text, require_text, Validate, ValidationError};
use super::{deserialize_nullable, RecordId, RecordKind};
use crate::store::{EntityStore, Record, Repository};

/// Metadata for a file that has already been written by the upload handler.
///
/// `related_id` points loosely at a resident or application; nothing checks
/// that the target exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    pub file_name: String,
    pub file_type: String,
    pub file_size: u64,
    pub file_path: String,
    pub uploaded_by: String,
    pub category: String,
    pub related_id: Option<RecordId>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub file_name: String,
    pub file_type: String,
    pub file_size: u64,
    pub file_path: String,
    pub uploaded_by: String,
    pub category: String,
    #[serde(default)]
    pub related_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub related_id: Option<Option<RecordId>>,
}

impl Record for Document {
    type Draft = NewDocument;
    type Patch = DocumentPatch;

    const KIND: RecordKind = RecordKind::Document;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewDocument, now: DateTime<Utc>) -> Self {
        Self {
            id,
            file_name: draft.file_name,
            file_type: draft.file_type,
            file_size: draft.file_size,
            file_path: draft.file_path,
            uploaded_by: draft.uploaded_by,
            category: draft.category,
            related_id: draft.related_id,
            uploaded_at: now,
        }
    }

    fn apply(&mut self, patch: DocumentPatch) {
        if let Some(file_name) = patch.file_name {
            self.file_name = file_name;
        }
        if let Some(file_type) = patch.file_type {
            self.file_type = file_type;
        }
        if let Some(file_size) = patch.file_size {
            self.file_size = file_size;
        }
        if let Some(file_path) = patch.file_path {
            self.file_path = file_path;
        }
        if let Some(uploaded_by) = patch.uploaded_by {
            self.uploaded_by = uploaded_by;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(related_id) = patch.related_id {
            self.related_id = related_id;
        }
    }

    fn repository<S: EntityStore + ?Sized>(store: &S) -> &dyn Repository<Self> {
        store.documents()
    }
}

impl Validate for NewDocument {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("fileName", &self.file_name)?;
        require_text("fileType", &self.file_type)?;
        require_text("filePath", &self.file_path)?;
        require_text("uploadedBy", &self.uploaded_by)?;
        require_text("category", &self.category)
    }
}

impl Validate for DocumentPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        optional_text("fileName", self.file_name.as_deref())?;
        optional_text("fileType", self.file_type.as_deref())?;
        optional_text("filePath", self.file_path.as_deref())?;
        optional_text("uploadedBy", self.uploaded_by.as_deref())?;
        optional_text("category", self.category.as_deref())
    }
}
