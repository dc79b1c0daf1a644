//! Request types for the API

use serde::{Deserialize, Serialize};

/// Request body for `POST /ask/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// ID of the document to query
    pub document_id: i64,
    /// The question to be answered
    pub question: String,
}
