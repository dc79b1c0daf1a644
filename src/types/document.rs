//! Document metadata record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the `documents` table.
///
/// Created exactly once on a successful upload, never updated, never deleted.
/// The `id` is assigned by the repository and increases monotonically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Surrogate key assigned by the repository
    pub id: i64,
    /// Where the raw file bytes can be fetched
    pub url: String,
    /// Original client-supplied file name
    pub file_name: String,
    /// Repository-assigned insertion timestamp
    pub upload_date: DateTime<Utc>,
}
