//! Document listing endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::DocumentSummary;

/// GET /documents/ - List every stored document record
pub async fn list_documents(State(state): State<AppState>) -> Result<Json<Vec<DocumentSummary>>> {
    let records = state.repository().list_all()?;
    let summaries = records.iter().map(DocumentSummary::from).collect();
    Ok(Json(summaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::routes::testing::{test_state, MockEngine, MockExtractor, MockStore};
    use crate::server::routes::upload::store_and_record;
    use std::sync::Arc;

    #[tokio::test]
    async fn empty_repository_lists_nothing() {
        let state = test_state(
            Arc::new(MockStore { fail: false }),
            MockExtractor::returning(&[]),
            MockEngine::replying(None),
        );

        let Json(summaries) = list_documents(State(state)).await.unwrap();
        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn listing_matches_uploaded_documents() {
        let state = test_state(
            Arc::new(MockStore { fail: false }),
            MockExtractor::returning(&[]),
            MockEngine::replying(None),
        );

        let first = store_and_record(&state, "a.pdf", b"a").await.unwrap();
        let second = store_and_record(&state, "b.pdf", b"b").await.unwrap();

        let Json(summaries) = list_documents(State(state)).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, first.document_id);
        assert_eq!(summaries[0].url, first.url);
        assert_eq!(summaries[0].file_name, "a.pdf");
        assert_eq!(summaries[1].id, second.document_id);
        assert_eq!(summaries[1].file_name, "b.pdf");
    }
}
