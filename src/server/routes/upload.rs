//! PDF upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::UploadResponse;

/// POST /upload/ - Store a file and record its metadata
///
/// The first multipart field carrying a filename is taken as the payload;
/// any byte stream is accepted and forwarded as-is, with no validation of
/// file type, size, or content.
pub async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Storage(format!("Failed to read multipart field: {}", e)))?
    {
        let Some(file_name) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::Storage(format!("Failed to read file: {}", e)))?;

        file = Some((file_name, data.to_vec()));
        break;
    }

    let (file_name, data) =
        file.ok_or_else(|| Error::Storage("No file field in request".to_string()))?;

    tracing::info!("Uploading file: {} ({} bytes)", file_name, data.len());

    let response = store_and_record(&state, &file_name, &data).await?;

    tracing::info!(
        "Stored '{}' as document {} at {}",
        response.file_name,
        response.document_id,
        response.url
    );

    Ok(Json(response))
}

/// Forward bytes to the object store, then persist the metadata row
pub(crate) async fn store_and_record(
    state: &AppState,
    file_name: &str,
    data: &[u8],
) -> Result<UploadResponse> {
    let url = state.object_store().store(file_name, data).await?;
    let record = state.repository().insert(&url, file_name)?;

    Ok(UploadResponse {
        document_id: record.id,
        url: record.url,
        file_name: record.file_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::routes::testing::{test_state, MockEngine, MockExtractor, MockStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn upload_stores_bytes_and_persists_record() {
        let state = test_state(
            Arc::new(MockStore { fail: false }),
            MockExtractor::returning(&[]),
            MockEngine::replying(None),
        );

        let response = store_and_record(&state, "doc.pdf", b"%PDF-1.4").await.unwrap();

        assert_eq!(response.document_id, 1);
        assert_eq!(response.url, "https://store/doc.pdf");
        assert_eq!(response.file_name, "doc.pdf");

        let record = state.repository().get(1).unwrap().unwrap();
        assert_eq!(record.url, "https://store/doc.pdf");
        assert_eq!(record.file_name, "doc.pdf");
    }

    #[tokio::test]
    async fn store_failure_leaves_no_record() {
        let state = test_state(
            Arc::new(MockStore { fail: true }),
            MockExtractor::returning(&[]),
            MockEngine::replying(None),
        );

        let result = store_and_record(&state, "doc.pdf", b"%PDF-1.4").await;
        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(state.repository().list_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_uploads_issue_increasing_ids() {
        let state = test_state(
            Arc::new(MockStore { fail: false }),
            MockExtractor::returning(&[]),
            MockEngine::replying(None),
        );

        let first = store_and_record(&state, "a.pdf", b"a").await.unwrap();
        let second = store_and_record(&state, "b.pdf", b"b").await.unwrap();
        assert!(second.document_id > first.document_id);
    }
}
