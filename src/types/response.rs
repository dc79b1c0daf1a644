//! Response types for the API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DocumentRecord;

/// Response for `POST /upload/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// ID assigned to the new document
    pub document_id: i64,
    /// Fetch URL returned by the object store
    pub url: String,
    /// Original file name
    pub file_name: String,
}

/// Response for `POST /ask/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Generated answer text
    pub answer: String,
}

/// One entry in the `GET /documents/` listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: i64,
    pub url: String,
    pub file_name: String,
    pub upload_date: DateTime<Utc>,
}

impl From<&DocumentRecord> for DocumentSummary {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            id: record.id,
            url: record.url.clone(),
            file_name: record.file_name.clone(),
            upload_date: record.upload_date,
        }
    }
}
